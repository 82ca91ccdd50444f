use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::ui::{Footer, HeroSection, ImpactSection, Navigation, SolutionsSection};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages titles and meta tags.
    provide_meta_context();

    view! {
        <SeoMeta />

        // The page regions in their fixed vertical order.
        <div class="page">
            <Navigation />
            <HeroSection />
            <ImpactSection />
            <SolutionsSection />
            <Footer />
        </div>
    }
}

/// SEO meta tags via leptos_meta.
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="EconoImpact - The Hidden Costs of Economic Growth" />

        <Meta
            name="description"
            content="Explore the environmental degradation, rising inequality, and sustainability challenges that shadow unlimited economic expansion - and the pathways to a better future."
        />
        <Meta
            name="keywords"
            content="economic growth, externalities, environment, inequality, resource depletion, sustainability, degrowth, regenerative economy"
        />

        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="EconoImpact - The Hidden Costs of Economic Growth" />
        <Meta
            property="og:description"
            content="The environmental, social, and resource costs of unconstrained economic growth, and proven approaches to sustainable prosperity."
        />
    }
}
