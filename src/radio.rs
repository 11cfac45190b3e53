//! Simulated radio-listening feed.
//!
//! There is no speech-to-text backend wired up; this module fabricates a
//! plausible last-four-hours transcript feed for the monitored stations,
//! drawing phrases from fixed per-language pools with a weighted sentiment
//! split (40% positive, 35% neutral, 25% negative).

use crate::models::{Language, RadioMention, Sentiment, SentimentSummary};
use chrono::{Duration, Local};
use rand::{Rng, rng};
use tracing::{info, instrument};

/// Stations the dashboard claims to monitor.
pub const STATIONS: [&str; 4] = [
    "Rádio Rural (UY)",
    "Carve 850 AM",
    "Rádio Gaúcha (BR)",
    "Jovem Pan Agro",
];

/// Mentions generated per run.
const MENTION_COUNT: usize = 20;

const POSITIVE_PT: [&str; 7] = [
    "O Agro en Punta está batendo todos os recordes de público este ano",
    "Excelente momento para o agronegócio da região, segundo os analistas",
    "Os acordos assinados no evento devem destravar bilhões em investimentos",
    "Produtores saem otimistas das rodadas de negócios em Punta del Este",
    "A safra vem forte e os preços acompanham, ótima notícia para o campo",
    "Tecnologia apresentada no evento promete reduzir custos na lavoura",
    "Exportações em alta consolidam o Mercosul como potência agrícola",
];

const NEUTRAL_PT: [&str; 6] = [
    "O evento segue até domingo no centro de convenções de Punta del Este",
    "Autoridades dos países do Mercosul participam da agenda de hoje",
    "A programação inclui painéis sobre pecuária, grãos e agtechs",
    "Amanhã acontece o painel sobre crédito rural e seguro agrícola",
    "A organização espera visitantes de mais de vinte países",
    "O clima na região segue estável para os próximos dias",
];

const NEGATIVE_PT: [&str; 7] = [
    "Produtores reclamam do custo logístico para chegar ao evento",
    "A seca no norte do Uruguai ainda preocupa os pecuaristas",
    "Críticas à falta de definição sobre as tarifas de exportação",
    "O câmbio volátil trava negócios fechados durante a feira",
    "Pequenos produtores dizem estar fora das rodadas de investimento",
    "Atrasos na infraestrutura portuária seguem sem resposta do governo",
    "Analistas alertam para queda nos preços internacionais dos grãos",
];

const POSITIVE_ES: [&str; 7] = [
    "El Agro en Punta está batiendo todos los récords de público este año",
    "Excelente momento para el agronegocio de la región, según los analistas",
    "Los acuerdos firmados en el evento destrabarían miles de millones en inversiones",
    "Los productores salen optimistas de las rondas de negocios en Punta del Este",
    "La cosecha viene fuerte y los precios acompañan, gran noticia para el campo",
    "La tecnología presentada en el evento promete bajar costos en el campo",
    "Las exportaciones en alza consolidan al Mercosur como potencia agrícola",
];

const NEUTRAL_ES: [&str; 6] = [
    "El evento sigue hasta el domingo en el centro de convenciones de Punta del Este",
    "Autoridades de los países del Mercosur participan de la agenda de hoy",
    "La programación incluye paneles sobre ganadería, granos y agtechs",
    "Mañana se realiza el panel sobre crédito rural y seguro agrícola",
    "La organización espera visitantes de más de veinte países",
    "El clima en la región sigue estable para los próximos días",
];

const NEGATIVE_ES: [&str; 7] = [
    "Los productores se quejan del costo logístico para llegar al evento",
    "La sequía en el norte de Uruguay sigue preocupando a los ganaderos",
    "Críticas por la falta de definición sobre los aranceles de exportación",
    "El tipo de cambio volátil frena negocios cerrados durante la feria",
    "Pequeños productores dicen quedar afuera de las rondas de inversión",
    "Las demoras en la infraestructura portuaria siguen sin respuesta del gobierno",
    "Analistas alertan por la caída de los precios internacionales de los granos",
];

fn pools(lang: Language) -> (&'static [&'static str], &'static [&'static str], &'static [&'static str]) {
    match lang {
        Language::PtBr => (&POSITIVE_PT, &NEUTRAL_PT, &NEGATIVE_PT),
        Language::EsUy => (&POSITIVE_ES, &NEUTRAL_ES, &NEGATIVE_ES),
    }
}

/// Generate the simulated mention feed for the last four hours, newest
/// first.
#[instrument(level = "info", fields(?lang))]
pub fn simulate_listening(lang: Language) -> Vec<RadioMention> {
    let (positive, neutral, negative) = pools(lang);
    let mut rng = rng();
    let now = Local::now();

    let mut mentions = Vec::with_capacity(MENTION_COUNT);
    for _ in 0..MENTION_COUNT {
        let roll: f64 = rng.random();
        let (sentiment, pool) = if roll < 0.40 {
            (Sentiment::Positive, positive)
        } else if roll < 0.75 {
            (Sentiment::Neutral, neutral)
        } else {
            (Sentiment::Negative, negative)
        };

        let offset = Duration::minutes(rng.random_range(5..=240))
            + Duration::seconds(rng.random_range(0..60));
        mentions.push(RadioMention {
            timestamp: (now - offset).format("%H:%M:%S").to_string(),
            station: STATIONS[rng.random_range(0..STATIONS.len())].to_string(),
            transcript: pool[rng.random_range(0..pool.len())].to_string(),
            sentiment,
        });
    }

    mentions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    info!(count = mentions.len(), "Generated radio mention feed");
    mentions
}

/// Tally mention sentiments for the snapshot summary.
pub fn sentiment_summary(mentions: &[RadioMention]) -> SentimentSummary {
    let mut summary = SentimentSummary::default();
    for mention in mentions {
        match mention.sentiment {
            Sentiment::Positive => summary.positive += 1,
            Sentiment::Neutral => summary.neutral += 1,
            Sentiment::Negative => summary.negative += 1,
        }
    }
    summary
}
