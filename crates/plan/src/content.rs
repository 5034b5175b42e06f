//! Literal content of the monthly financial plan deck.
//!
//! Every figure here is a hand-computed literal; nothing is derived at
//! runtime.

use deck_core::Rgb;

pub const DECK_TITLE: &str = "Plano Financeiro Mensal";

/// Where the CLI writes the deck by default, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "docs/finance/MagicLawyer_Custos_Mensais.pptx";

// Slide 1: cover
pub const COVER_LABEL: &str = "Magic Lawyer – 10/11/2025";
pub const COVER_TITLE: &str = "Plano Financeiro Mensal";
pub const COVER_SUBTITLE: &str = "História de investimento e assinatura para o parceiro certo";

/// Text of one icon card. Cards come in rows of three whose accents are
/// the palette's secondary, primary and tertiary colors, left to right.
#[derive(Debug, Clone, Copy)]
pub struct CardText {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
}

pub const COVER_CARDS: [CardText; 3] = [
    CardText {
        icon: "💠",
        title: "Infra fixa",
        value: "R$ 1,678 mil",
        caption: "Hosting, banco, realtime, DNS e contas Google",
    },
    CardText {
        icon: "📈",
        title: "Envelope variável",
        value: "R$ 2,35 mil",
        caption: "Pagamentos, mensageria, storage extra, WhatsApp",
    },
    CardText {
        icon: "🚀",
        title: "Break-even",
        value: "Mix 5-3-1",
        caption: "5 Básico + 3 Pro + 1 Enterprise = R$ 4,6 mil",
    },
];

// Slide 2: quick view
pub const SNAPSHOT_LABEL: &str = "snapshot";
pub const SNAPSHOT_TITLE: &str = "Visão Rápida";
pub const SNAPSHOT_SUBTITLE: &str = "Quanto precisamos por mês e como cada bloco se paga";
pub const SNAPSHOT_BULLETS: &[&str] = &[
    "Capex recorrente estimado: **R$ 4,0 mil/mês** (infra obrigatória + variáveis moderadas).",
    "Foco em previsibilidade: contratos anuais com cloud + provisionamento de variáveis evita sustos.",
    "MRR alvo para break-even imediato: **R$ 1,7 mil** (7 Básico ou 3 Pro).",
    "Margem operacional desejada pós-break-even: **≥ R$ 2,5 mil/mês** para CAC e sucesso do cliente.",
    "Escala adicional vem de add-ons (WhatsApp oficial, storage premium, onboarding white-glove).",
];

// Slide 3: fixed infrastructure
pub const INFRA_LABEL: &str = "infraestrutura";
pub const INFRA_TITLE: &str = "Stack Obrigatório";
pub const INFRA_SUBTITLE: &str = "Serviços que mantêm o Magic Lawyer 24/7";
pub const INFRA_TABLE: &[&[&str]] = &[
    &["Serviço", "Função", "Plano", "R$/mês"],
    &["Vercel", "Hosting Next.js + crons", "Team Pro", "220"],
    &["Neon/Supabase", "PostgreSQL multi-tenant", "Pro 2 CU / 500 GB", "435"],
    &["Upstash Redis", "BullMQ, locks e cache", "Pro 100M cmds", "110"],
    &["Ably", "Realtime multi-tenant", "Business 3M msgs", "270"],
    &["Cloudinary", "Docs pesados e transformações", "Advanced 600 créditos", "545"],
    &["Google Workspace", "SMTP + contas core", "Business Starter (2)", "78"],
    &["Domínios + Cloudflare", "DNS, SSL e WAF", "Registros + CF Pro", "45"],
];
pub const INFRA_HEADER_FILL: Rgb = Rgb(229, 235, 248);
pub const INFRA_BODY_FILL: Rgb = Rgb(241, 247, 255);

// Slide 4: variable envelope
pub const VARIABLE_LABEL: &str = "variáveis";
pub const VARIABLE_TITLE: &str = "Envelope Variável";
pub const VARIABLE_SUBTITLE: &str = "Custos sensíveis a volume e engrenagens de receita";
pub const VARIABLE_TABLE: &[&[&str]] = &[
    &["Item", "Métrica de cobrança", "Exemplo/mês", "Investimento (R$)"],
    &["Asaas", "Boleto/PIX/cartão", "200 boletos + 100 PIX + 80 cartões", "1.414"],
    &["Cloudinary extra", "Crédito adicional", "+300 créditos", "248"],
    &["Ably excedente", "Mensagens > 3M", "+5M msgs", "69"],
    &["Upstash overage", "Comandos adicionais", "+300k cmds", "3"],
    &["Backups S3/Wasabi", "200 GB", "Snapshots + assets", "25"],
    &["ngrok Pro", "QA de webhooks", "1 túnel", "88"],
    &["Resend fallback", "40k e-mails", "Starter + excedente", "154"],
    &["Meta Cloud API", "1.000 conversas", "Mix autenticação/utilidade", "350"],
];
pub const VARIABLE_HEADER_FILL: Rgb = Rgb(229, 248, 247);
pub const VARIABLE_BODY_FILL: Rgb = Rgb(236, 251, 250);

// Slide 5: subscription plans
pub const PLANS_LABEL: &str = "receita";
pub const PLANS_TITLE: &str = "Oferta de Assinatura";
pub const PLANS_SUBTITLE: &str = "O que cada plano entrega e quanto cobramos";
pub const PLANS_TABLE: &[&[&str]] = &[
    &["Plano", "Perfil", "Limites inclusos", "Preço mensal", "Preço anual"],
    &["Básico", "Até 3 usuários", "50 processos / 1 GB / 500 docs", "R$ 249", "R$ 2.490"],
    &["Pro", "Até 10 usuários", "200 processos / 5 GB / 2k docs", "R$ 699", "R$ 6.990"],
    &["Enterprise", "Até 50 usuários", "1.000 processos / 20 GB / 10k docs", "R$ 1.299", "R$ 12.990"],
    &["Ultra", "Sob demanda", "Limites customizados + gerente", "R$ 2.490+", "Sob consulta"],
];
pub const PLANS_HEADER_FILL: Rgb = Rgb(253, 237, 218);
pub const PLANS_BODY_FILL: Rgb = Rgb(255, 248, 237);
pub const PLANS_BULLETS: &[&str] = &[
    "Add-ons: WhatsApp oficial, storage adicional, blocos de documentos e onboarding premium.",
    "Upsell planejado após adoção do Pro (integrações PJe, API e automações).",
];

// Slide 6: break-even
pub const BREAK_EVEN_LABEL: &str = "rentabilidade";
pub const BREAK_EVEN_TITLE: &str = "Break-even & Payback";
pub const BREAK_EVEN_SUBTITLE: &str = "Como a assinatura cobre o investimento mensal";
pub const BREAK_EVEN_CARDS: [CardText; 3] = [
    CardText {
        icon: "🎯",
        title: "Meta 5-3-1",
        value: "R$ 4,641",
        caption: "5 Básico + 3 Pro + 1 Enterprise pagam o mês e sobram R$ 2,963",
    },
    CardText {
        icon: "⚡️",
        title: "Payback imediato",
        value: "R$ 1,7 mil",
        caption: "7 Básico ou 3 Pro já cobrem a infra fixa de R$ 1,678",
    },
    CardText {
        icon: "💸",
        title: "Margem alvo",
        value: "≥ R$ 2,5 mil",
        caption: "Reserva mensal para CAC, marketing e sucesso do cliente",
    },
];
pub const BREAK_EVEN_TABLE: &[&[&str]] = &[
    &["Mix", "Receita", "Margem sobre fixo", "Comentário"],
    &["5B + 4P + 1E", "R$ 5.340", "R$ 3.662", "Foco em Pro acelera margem"],
    &["5B + 5P", "R$ 4.740", "R$ 3.062", "Sem Enterprise ainda cobre folgado"],
    &["5B + 2P + 2E", "R$ 5.241", "R$ 3.563", "Enterprise libera caixa para marketing"],
];
pub const BREAK_EVEN_HEADER_FILL: Rgb = Rgb(228, 236, 255);
pub const BREAK_EVEN_BODY_FILL: Rgb = Rgb(239, 244, 255);

// Slide 7: scale projection
pub const SCALE_LABEL: &str = "escala";
pub const SCALE_TITLE: &str = "Projeção por Estágio";
pub const SCALE_SUBTITLE: &str = "Infra + variáveis versus crescimento de tenants";
pub const SCALE_TABLE: &[&[&str]] = &[
    &["Estágio", "Tenants", "Usuários", "Processos/mês", "Receita EUA (Asaas)", "Opex variável", "Custo total"],
    &["Lançamento", "3", "60", "150", "R$ 90 mil", "R$ 450", "R$ 2.130"],
    &["Crescimento", "10", "250", "600", "R$ 360 mil", "R$ 1.650", "R$ 3.330"],
    &["Escala regional", "25", "700", "1.800", "R$ 1,1 milhão", "R$ 4.900", "R$ 6.580"],
];
pub const SCALE_HEADER_FILL: Rgb = Rgb(227, 245, 255);
pub const SCALE_BODY_FILL: Rgb = Rgb(237, 250, 255);
pub const SCALE_BULLETS: &[&str] = &[
    "Receita Asaas assume ticket de R$ 600 e taxa média de 3%.",
    "Acima de 25 tenants: planejar Postgres dedicado e Redis dimensionado.",
];

// Slide 8: next steps
pub const NEXT_STEPS_LABEL: &str = "ação";
pub const NEXT_STEPS_TITLE: &str = "Próximos Passos";
pub const NEXT_STEPS_SUBTITLE: &str = "Onde investir energia após o cheque";
pub const NEXT_STEPS_LEFT: &[&str] = &[
    "Rever câmbio e contratos com cloud trimestralmente.",
    "Rodar dashboards públicos do “5-3-1” para toda a operação.",
    "Pacotar add-ons premium (WhatsApp oficial, storage extra, onboarding white-glove).",
];
pub const NEXT_STEPS_RIGHT: &[&str] = &[
    "Gatilho de reinvestimento: margem ≥ R$ 2,5 mil → CAC e conteúdo.",
    "Atualizar documento financeiro sempre que entrar novo serviço pago.",
    "Preparar métricas de adoção para próxima rodada (churn, NRR, payback CAC).",
];

/// Font size of the short bullet lists under tables.
pub const FOOTNOTE_SIZE: f64 = 14.0;
