//! Mock fallback news generator.
//!
//! When both live fetchers come back empty the dashboard still has to show
//! something, so this module synthesizes a fixed table of plausible records:
//! eight about the Agro en Punta event and eight covering the wider
//! agribusiness beat. Content is fixed per language; only the time labels
//! are randomized to simulate freshness.

use crate::models::{AGRO_EN_PUNTA, Language, NewsRecord};
use rand::{Rng, rng};
use tracing::{info, instrument};

struct MockItem {
    title: &'static str,
    vehicle: &'static str,
    link: &'static str,
    category: &'static str,
}

const EVENT_NEWS_PT: [MockItem; 8] = [
    MockItem {
        title: "Agro en Punta 2026 reúne 15 mil produtores em Punta del Este",
        vehicle: "El País Uruguay",
        link: "https://www.elpais.com.uy/agro/agro-en-punta-2026-reune-15-mil-produtores",
        category: AGRO_EN_PUNTA,
    },
    MockItem {
        title: "Ministros do Mercosul assinam acordos históricos no Agro en Punta",
        vehicle: "El Observador",
        link: "https://www.elobservador.com.uy/agro/ministros-mercosul-acordos-historicos",
        category: AGRO_EN_PUNTA,
    },
    MockItem {
        title: "Startups agtech apresentam inovações no Agro en Punta 2026",
        vehicle: "La Nación Campo",
        link: "https://www.lanacion.com.ar/economia/campo/startups-agtech-agro-en-punta",
        category: AGRO_EN_PUNTA,
    },
    MockItem {
        title: "Brasil e Uruguai firmam parceria para rastreabilidade bovina no evento",
        vehicle: "Canal Rural",
        link: "https://www.canalrural.com.br/noticias/rastreabilidade-bovina-brasil-uruguai",
        category: AGRO_EN_PUNTA,
    },
    MockItem {
        title: "Agro en Punta destaca sustentabilidade como futuro do agronegócio",
        vehicle: "Agrolink",
        link: "https://www.agrolink.com.br/noticias/agro-en-punta-sustentabilidade",
        category: AGRO_EN_PUNTA,
    },
    MockItem {
        title: "Delegação brasileira de 500 produtores participa do Agro en Punta",
        vehicle: "Notícias Agrícolas",
        link: "https://www.noticiasagricolas.com.br/noticias/delegacao-brasileira-agro-en-punta",
        category: AGRO_EN_PUNTA,
    },
    MockItem {
        title: "Evento em Punta del Este movimenta US$ 2 bilhões em negócios",
        vehicle: "Valor Econômico",
        link: "https://valor.globo.com/agronegocios/evento-punta-del-este-negocios",
        category: AGRO_EN_PUNTA,
    },
    MockItem {
        title: "Tecnologia de precisão é destaque no pavilhão do Agro en Punta",
        vehicle: "El País Uruguay",
        link: "https://www.elpais.com.uy/agro/tecnologia-precisao-pavilhao",
        category: AGRO_EN_PUNTA,
    },
];

const OTHER_NEWS_PT: [MockItem; 8] = [
    MockItem {
        title: "Exportações agrícolas do Uruguai batem recorde em janeiro",
        vehicle: "El Observador",
        link: "https://www.elobservador.com.uy/economia/exportacoes-agricolas-recorde",
        category: "Mercado",
    },
    MockItem {
        title: "Preço da soja atinge máxima histórica nas bolsas internacionais",
        vehicle: "Valor Econômico",
        link: "https://valor.globo.com/agronegocios/preco-soja-maxima-historica",
        category: "Commodities",
    },
    MockItem {
        title: "Investimentos em irrigação crescem 40% na região do Mercosul",
        vehicle: "Canal Rural",
        link: "https://www.canalrural.com.br/noticias/investimentos-irrigacao-mercosul",
        category: "Investimentos",
    },
    MockItem {
        title: "Pecuária uruguaia conquista novos mercados na Ásia",
        vehicle: "La Nación Campo",
        link: "https://www.lanacion.com.ar/economia/campo/pecuaria-uruguaia-asia",
        category: "Exportação",
    },
    MockItem {
        title: "Safra de trigo 2026 tem previsão recorde para Argentina e Brasil",
        vehicle: "Agrolink",
        link: "https://www.agrolink.com.br/noticias/safra-trigo-2026-recorde",
        category: "Safra",
    },
    MockItem {
        title: "Dólar agro impulsiona exportações do agronegócio brasileiro",
        vehicle: "Notícias Agrícolas",
        link: "https://www.noticiasagricolas.com.br/noticias/dolar-agro-exportacoes",
        category: "Câmbio",
    },
    MockItem {
        title: "China aumenta importação de carne bovina do Mercosul em 25%",
        vehicle: "Valor Econômico",
        link: "https://valor.globo.com/agronegocios/china-importacao-carne-bovina",
        category: "Exportação",
    },
    MockItem {
        title: "Produtores do RS investem em agricultura regenerativa",
        vehicle: "Canal Rural",
        link: "https://www.canalrural.com.br/noticias/agricultura-regenerativa-rs",
        category: "Sustentabilidade",
    },
];

const EVENT_NEWS_ES: [MockItem; 8] = [
    MockItem {
        title: "Agro en Punta 2026 reúne a 15 mil productores en Punta del Este",
        vehicle: "El País Uruguay",
        link: "https://www.elpais.com.uy/agro/agro-en-punta-2026-reune-15-mil-produtores",
        category: AGRO_EN_PUNTA,
    },
    MockItem {
        title: "Ministros del Mercosur firman acuerdos históricos en Agro en Punta",
        vehicle: "El Observador",
        link: "https://www.elobservador.com.uy/agro/ministros-mercosul-acordos-historicos",
        category: AGRO_EN_PUNTA,
    },
    MockItem {
        title: "Startups agtech presentan innovaciones en Agro en Punta 2026",
        vehicle: "La Nación Campo",
        link: "https://www.lanacion.com.ar/economia/campo/startups-agtech-agro-en-punta",
        category: AGRO_EN_PUNTA,
    },
    MockItem {
        title: "Brasil y Uruguay firman alianza para trazabilidad bovina en el evento",
        vehicle: "Canal Rural",
        link: "https://www.canalrural.com.br/noticias/rastreabilidade-bovina-brasil-uruguai",
        category: AGRO_EN_PUNTA,
    },
    MockItem {
        title: "Agro en Punta destaca la sustentabilidad como futuro del agronegocio",
        vehicle: "Agrolink",
        link: "https://www.agrolink.com.br/noticias/agro-en-punta-sustentabilidade",
        category: AGRO_EN_PUNTA,
    },
    MockItem {
        title: "Delegación brasileña de 500 productores participa del Agro en Punta",
        vehicle: "Notícias Agrícolas",
        link: "https://www.noticiasagricolas.com.br/noticias/delegacao-brasileira-agro-en-punta",
        category: AGRO_EN_PUNTA,
    },
    MockItem {
        title: "Evento en Punta del Este mueve US$ 2 mil millones en negocios",
        vehicle: "Valor Econômico",
        link: "https://valor.globo.com/agronegocios/evento-punta-del-este-negocios",
        category: AGRO_EN_PUNTA,
    },
    MockItem {
        title: "Tecnología de precisión es protagonista en el pabellón del Agro en Punta",
        vehicle: "El País Uruguay",
        link: "https://www.elpais.com.uy/agro/tecnologia-precisao-pavilhao",
        category: AGRO_EN_PUNTA,
    },
];

const OTHER_NEWS_ES: [MockItem; 8] = [
    MockItem {
        title: "Exportaciones agrícolas de Uruguay baten récord en enero",
        vehicle: "El Observador",
        link: "https://www.elobservador.com.uy/economia/exportacoes-agricolas-recorde",
        category: "Mercado",
    },
    MockItem {
        title: "Precio de la soja alcanza máximo histórico en las bolsas internacionales",
        vehicle: "Valor Econômico",
        link: "https://valor.globo.com/agronegocios/preco-soja-maxima-historica",
        category: "Commodities",
    },
    MockItem {
        title: "Inversiones en riego crecen 40% en la región del Mercosur",
        vehicle: "Canal Rural",
        link: "https://www.canalrural.com.br/noticias/investimentos-irrigacao-mercosul",
        category: "Investimentos",
    },
    MockItem {
        title: "Ganadería uruguaya conquista nuevos mercados en Asia",
        vehicle: "La Nación Campo",
        link: "https://www.lanacion.com.ar/economia/campo/pecuaria-uruguaia-asia",
        category: "Exportação",
    },
    MockItem {
        title: "Cosecha de trigo 2026 tiene pronóstico récord para Argentina y Brasil",
        vehicle: "Agrolink",
        link: "https://www.agrolink.com.br/noticias/safra-trigo-2026-recorde",
        category: "Safra",
    },
    MockItem {
        title: "Dólar agro impulsa las exportaciones del agronegocio brasileño",
        vehicle: "Notícias Agrícolas",
        link: "https://www.noticiasagricolas.com.br/noticias/dolar-agro-exportacoes",
        category: "Câmbio",
    },
    MockItem {
        title: "China aumenta 25% la importación de carne vacuna del Mercosur",
        vehicle: "Valor Econômico",
        link: "https://valor.globo.com/agronegocios/china-importacao-carne-bovina",
        category: "Exportação",
    },
    MockItem {
        title: "Productores de Río Grande del Sur invierten en agricultura regenerativa",
        vehicle: "Canal Rural",
        link: "https://www.canalrural.com.br/noticias/agricultura-regenerativa-rs",
        category: "Sustentabilidade",
    },
];

fn ago_marker(lang: Language) -> &'static str {
    match lang {
        Language::PtBr => "Há",
        Language::EsUy => "Hace",
    }
}

/// Generate the fixed mock news table for the given language.
///
/// Always returns 16 well-formed records: 8 in the event category and 8
/// across the other beats. Event items get a 10-360 minute freshness
/// offset; the rest get 1-12 hours. `cached_at` is left unset for the
/// cache merge to stamp.
#[instrument(level = "info", fields(?lang))]
pub fn mock_news(lang: Language) -> Vec<NewsRecord> {
    let (event_items, other_items) = match lang {
        Language::PtBr => (&EVENT_NEWS_PT, &OTHER_NEWS_PT),
        Language::EsUy => (&EVENT_NEWS_ES, &OTHER_NEWS_ES),
    };

    let mut rng = rng();
    let marker = ago_marker(lang);
    let mut records = Vec::with_capacity(event_items.len() + other_items.len());

    for item in event_items {
        let offset_min: i64 = rng.random_range(10..=360);
        records.push(to_record(item, format!("{marker} {offset_min} min")));
    }

    for item in other_items {
        let offset_min: i64 = rng.random_range(60..=720);
        let hours = offset_min / 60;
        let mins = offset_min % 60;
        let time_label = if hours > 0 {
            format!("{marker} {hours}h {mins}min")
        } else {
            format!("{marker} {mins} min")
        };
        records.push(to_record(item, time_label));
    }

    info!(count = records.len(), "Generated mock news fallback");
    records
}

fn to_record(item: &MockItem, time_label: String) -> NewsRecord {
    NewsRecord {
        time_label,
        source_name: item.vehicle.to_string(),
        title: item.title.to_string(),
        link: item.link.to_string(),
        category: Some(item.category.to_string()),
        cached_at: None,
    }
}
