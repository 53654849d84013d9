//! Seed population
//!
//! Fixed starter articles inserted once at startup when the article table is
//! empty. This is bootstrap content, not runtime behavior: the dataset is a
//! literal and the population step is idempotent by count-check.

use crate::db::stores::ArticleStore;
use crate::models::CreateArticleInput;
use anyhow::Result;

struct SeedArticle {
    title: &'static str,
    subtitle: &'static str,
    content: &'static str,
    category: &'static str,
    author: &'static str,
}

const SEED_ARTICLES: &[SeedArticle] = &[
    SeedArticle {
        title: "Understanding Global Warming",
        subtitle: "The science behind rising global temperatures and their impact on our planet",
        content: r#"Global warming refers to the long-term increase in Earth's average surface temperature due to greenhouse gas emissions from human activities. Since the late 19th century, Earth's average temperature has risen by about 1.1°C (2°F).

The primary cause is the burning of fossil fuels (coal, oil, and natural gas), which releases carbon dioxide and other greenhouse gases into the atmosphere. These gases trap heat from the sun, creating a 'greenhouse effect.'

Key impacts include:
• Rising sea levels due to thermal expansion and melting ice
• More frequent and intense extreme weather events
• Ocean acidification affecting marine ecosystems
• Shifts in precipitation patterns
• Threats to biodiversity and food security

The scientific consensus is clear: human activities are the dominant cause of observed warming since the mid-20th century. Immediate action is needed to reduce emissions and limit global temperature rise to 1.5°C above pre-industrial levels."#,
        category: "Science",
        author: "Climate Research Team",
    },
    SeedArticle {
        title: "Renewable Energy Solutions",
        subtitle: "How clean energy technologies can help combat climate change",
        content: r#"Renewable energy sources offer a sustainable path forward in the fight against climate change. These technologies harness natural processes that are constantly replenished, providing clean alternatives to fossil fuels.

Solar Power:
• Photovoltaic cells convert sunlight directly into electricity
• Costs have dropped 85% since 2010
• Can be deployed at utility scale or distributed on rooftops

Wind Energy:
• Onshore and offshore wind farms generate clean electricity
• Technology improvements have increased efficiency and reduced costs
• Provides reliable power when combined with energy storage

Hydropower:
• Uses flowing water to generate electricity
• Provides consistent, dispatchable power
• Can be combined with pumped storage for grid stability

Other promising technologies include geothermal energy, biomass, and emerging solutions like tidal and wave power. The key is creating an integrated energy system that combines multiple renewable sources with smart grid technology and energy storage.

Investment in renewable energy has grown dramatically, with global capacity increasing by 45% in 2020 alone. This transition not only reduces emissions but also creates jobs, improves air quality, and enhances energy security."#,
        category: "Solutions",
        author: "Energy Innovation Team",
    },
    SeedArticle {
        title: "Climate Change and Extreme Weather",
        subtitle: "How global warming is intensifying storms, droughts, and heatwaves",
        content: r#"Climate change is making extreme weather events more frequent, intense, and destructive. As global temperatures rise, the atmosphere can hold more moisture, leading to heavier rainfall and more powerful storms.

Hurricanes and Typhoons:
• Warmer ocean temperatures fuel more intense storms
• Rising sea levels increase storm surge damage
• Storms are moving slower, causing more prolonged impacts

Heatwaves:
• Record-breaking temperatures are becoming more common
• Urban heat islands amplify the effects
• Heat-related deaths are increasing globally

Droughts and Wildfires:
• Higher temperatures increase evaporation rates
• Drier conditions create fuel for wildfires
• Water scarcity affects agriculture and communities

Flooding:
• Heavier rainfall overwhelms drainage systems
• Sea level rise increases coastal flooding risk
• Flash floods are becoming more common

These extreme events have cascading effects on:
• Agriculture and food security
• Infrastructure and transportation
• Public health and safety
• Economic stability
• Ecosystem health

Adaptation measures include improved early warning systems, resilient infrastructure design, and community preparedness programs. However, reducing greenhouse gas emissions remains the most effective long-term solution."#,
        category: "Impact",
        author: "Climate Impact Research",
    },
    SeedArticle {
        title: "Individual Actions for Climate Change",
        subtitle: "How you can make a difference in the fight against global warming",
        content: r#"While systemic change is essential, individual actions collectively make a significant impact. Here are practical steps you can take to reduce your carbon footprint:

Transportation:
• Use public transit, biking, or walking when possible
• Choose electric or hybrid vehicles
• Combine errands to reduce trips
• Consider carpooling or ride-sharing

Energy at Home:
• Switch to LED light bulbs
• Use programmable thermostats
• Insulate your home properly
• Choose energy-efficient appliances
• Consider solar panels or renewable energy plans

Diet and Food:
• Reduce meat consumption, especially beef
• Buy local and seasonal produce
• Minimize food waste
• Choose organic when possible
• Grow your own vegetables

Consumption Habits:
• Buy less, choose quality over quantity
• Repair items instead of replacing them
• Choose products with minimal packaging
• Support companies with sustainable practices
• Reduce, reuse, and recycle

Advocacy:
• Vote for climate-conscious leaders
• Support environmental organizations
• Educate others about climate change
• Participate in community climate initiatives
• Use your voice on social media

Remember: Small actions add up. The most important step is to start somewhere and build sustainable habits over time."#,
        category: "Solutions",
        author: "Climate Action Team",
    },
];

/// Populate the article store with the fixed starter content.
///
/// Runs at startup; does nothing when the store already holds any articles.
/// Returns the number of articles inserted.
pub async fn populate_initial_articles(store: &dyn ArticleStore) -> Result<usize> {
    if store.count().await? > 0 {
        tracing::debug!("Article store already populated, skipping seed");
        return Ok(0);
    }

    for seed in SEED_ARTICLES {
        let input = CreateArticleInput::new(
            seed.title.to_string(),
            seed.subtitle.to_string(),
            seed.content.to_string(),
            seed.category.to_string(),
        )
        .with_author(seed.author.to_string());

        store.insert(&input).await?;
    }

    tracing::info!("Seeded {} starter article(s)", SEED_ARTICLES.len());
    Ok(SEED_ARTICLES.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::stores::SqlxArticleStore;
    use crate::db::{connect_test_pool, migrations};
    use crate::models::CategoryFilter;

    async fn setup_test_store() -> SqlxArticleStore {
        let pool = connect_test_pool().await.expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        SqlxArticleStore::new(pool)
    }

    #[tokio::test]
    async fn test_seed_inserts_four_articles_with_expected_categories() {
        let store = setup_test_store().await;

        let inserted = populate_initial_articles(&store).await.expect("Seed failed");
        assert_eq!(inserted, 4);

        let science = store
            .list_by_category(&CategoryFilter::Named("Science".to_string()))
            .await
            .unwrap();
        let solutions = store
            .list_by_category(&CategoryFilter::Named("Solutions".to_string()))
            .await
            .unwrap();
        let impact = store
            .list_by_category(&CategoryFilter::Named("Impact".to_string()))
            .await
            .unwrap();

        assert_eq!(science.len(), 1);
        assert_eq!(solutions.len(), 2);
        assert_eq!(impact.len(), 1);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = setup_test_store().await;

        let first = populate_initial_articles(&store).await.expect("Seed failed");
        let second = populate_initial_articles(&store).await.expect("Seed failed");

        assert_eq!(first, 4);
        assert_eq!(second, 0);
        assert_eq!(store.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_seed_skips_non_empty_store() {
        let store = setup_test_store().await;

        store
            .insert(&CreateArticleInput::new(
                "Existing".to_string(),
                "Already here".to_string(),
                "Body".to_string(),
                "Science".to_string(),
            ))
            .await
            .unwrap();

        let inserted = populate_initial_articles(&store).await.expect("Seed failed");

        assert_eq!(inserted, 0);
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
