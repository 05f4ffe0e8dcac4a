//! Mounted sections: live state with timers and guarded fetches.
//!
//! Each mounted section owns a `Lifecycle`. Unmounting (or dropping) it stops
//! the slider timer and discards any fetch result that arrives afterwards.

use std::sync::Arc;
use std::time::Duration;

use storefront_core::StorefrontConfig;
use storefront_data::CatalogSource;
use storefront_runtime::{Commit, Lifecycle, PeriodicTask, ViewCell};
use tokio::task::JoinHandle;

use crate::page::HomePage;
use crate::sections::{
    load_departments, load_products, DepartmentsGrid, FeaturedProducts, HeroSlider, NewsletterSection,
};

/// A hero slider advancing on its own.
pub struct MountedSlider {
    lifecycle: Lifecycle,
    state: ViewCell<HeroSlider>,
    interval: Duration,
    _timer: PeriodicTask,
}

impl MountedSlider {
    pub fn mount(parent: &Lifecycle, interval: Duration) -> Self {
        let lifecycle = Lifecycle::child_of(parent);
        let state = ViewCell::new(HeroSlider::new());
        let ticking = state.clone();
        let live = lifecycle.token().clone();
        let timer = lifecycle.every(interval, move || {
            ticking.update_if_live(&live, HeroSlider::advance);
        });

        Self {
            lifecycle,
            state,
            interval,
            _timer: timer,
        }
    }

    pub fn current(&self) -> HeroSlider {
        self.state.get()
    }

    pub fn view(&self) -> ViewCell<HeroSlider> {
        self.state.clone()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Jump to a slide, as a navigation dot click does.
    pub fn select(&self, index: usize) {
        self.state.update(|slider| {
            slider.select(index);
        });
    }

    /// Stop the timer. No advance lands after this returns.
    pub fn unmount(self) {
        self.lifecycle.unmount();
        self.state.fence();
    }
}

/// The departments grid with its taxonomy fetch in flight or done.
pub struct MountedDepartments {
    lifecycle: Lifecycle,
    state: ViewCell<DepartmentsGrid>,
    fetch: JoinHandle<Commit>,
}

impl MountedDepartments {
    pub fn mount<C>(parent: &Lifecycle, source: Arc<C>) -> Self
    where
        C: CatalogSource + Send + Sync + ?Sized + 'static,
    {
        let lifecycle = Lifecycle::child_of(parent);
        let state = ViewCell::new(DepartmentsGrid::default());
        let commit_to = state.clone();
        let live = lifecycle.token().clone();

        let fetch = lifecycle.spawn_guarded(
            async move { load_departments(source.as_ref()).await },
            move |rows| commit_to.update_if_live(&live, |grid| *grid = DepartmentsGrid::loaded(rows)),
        );

        Self {
            lifecycle,
            state,
            fetch,
        }
    }

    pub fn current(&self) -> DepartmentsGrid {
        self.state.get()
    }

    pub fn view(&self) -> ViewCell<DepartmentsGrid> {
        self.state.clone()
    }

    pub async fn loaded(&self) -> DepartmentsGrid {
        self.state.wait_for(|grid| !grid.state.is_loading()).await
    }

    /// Unmount. No commit lands after this returns; the handle resolves
    /// once the pending fetch settles.
    pub fn unmount(self) -> JoinHandle<Commit> {
        self.lifecycle.unmount();
        self.state.fence();
        self.fetch
    }
}

/// Featured products with their fetch in flight or done.
pub struct MountedFeatured {
    lifecycle: Lifecycle,
    state: ViewCell<FeaturedProducts>,
    fetch: JoinHandle<Commit>,
}

impl MountedFeatured {
    pub fn mount<C>(parent: &Lifecycle, source: Arc<C>, limit: u32) -> Self
    where
        C: CatalogSource + Send + Sync + ?Sized + 'static,
    {
        let lifecycle = Lifecycle::child_of(parent);
        let state = ViewCell::new(FeaturedProducts::default());
        let commit_to = state.clone();
        let live = lifecycle.token().clone();

        let fetch = lifecycle.spawn_guarded(
            async move { load_products(source.as_ref(), limit).await },
            move |products| {
                commit_to.update_if_live(&live, |featured| {
                    featured.state = FeaturedProducts::loaded(products).state;
                })
            },
        );

        Self {
            lifecycle,
            state,
            fetch,
        }
    }

    pub fn current(&self) -> FeaturedProducts {
        self.state.get()
    }

    pub fn view(&self) -> ViewCell<FeaturedProducts> {
        self.state.clone()
    }

    pub async fn loaded(&self) -> FeaturedProducts {
        self.state.wait_for(|featured| !featured.state.is_loading()).await
    }

    /// Switch tabs. Selection survives the data arriving.
    pub fn select_tab(&self, key: &str) {
        self.state.update(|featured| {
            featured.select_tab(key);
        });
    }

    /// Unmount. No commit lands after this returns; the handle resolves
    /// once the pending fetch settles.
    pub fn unmount(self) -> JoinHandle<Commit> {
        self.lifecycle.unmount();
        self.state.fence();
        self.fetch
    }
}

/// Every home section mounted under one lifecycle.
pub struct MountedHomePage {
    lifecycle: Lifecycle,
    pub hero: MountedSlider,
    pub departments: MountedDepartments,
    pub featured: MountedFeatured,
    newsletter: NewsletterSection,
}

impl MountedHomePage {
    pub fn mount<C>(source: Arc<C>, config: &StorefrontConfig) -> Self
    where
        C: CatalogSource + Send + Sync + ?Sized + 'static,
    {
        let lifecycle = Lifecycle::new();
        let hero = MountedSlider::mount(&lifecycle, config.hero.rotate_interval());
        let departments = MountedDepartments::mount(&lifecycle, source.clone());
        let featured = MountedFeatured::mount(&lifecycle, source, config.catalog.product_limit);
        tracing::debug!("home page mounted");

        Self {
            lifecycle,
            hero,
            departments,
            featured,
            newsletter: NewsletterSection::new(config.contact.whatsapp_url.clone()),
        }
    }

    /// The page as it stands now; catalog sections may still be loading.
    pub fn current(&self) -> HomePage {
        HomePage {
            hero: self.hero.current(),
            rotate_interval: self.hero.interval(),
            departments: self.departments.current(),
            featured: self.featured.current(),
            newsletter: self.newsletter.clone(),
        }
    }

    /// The page once both catalog sections have loaded.
    pub async fn snapshot(&self) -> HomePage {
        let departments = self.departments.loaded().await;
        let featured = self.featured.loaded().await;
        HomePage {
            departments,
            featured,
            ..self.current()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.departments.state.read(|grid| grid.state.is_loading())
            || self.featured.state.read(|featured| featured.state.is_loading())
    }

    pub fn unmount(self) {
        let Self {
            lifecycle,
            hero,
            departments,
            featured,
            ..
        } = self;
        lifecycle.unmount();
        hero.unmount();
        drop(departments.unmount());
        drop(featured.unmount());
        tracing::debug!("home page unmounted");
    }
}
