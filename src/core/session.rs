use crate::config::toml_config::SeedDish;
use crate::config::MenuSettings;
use crate::core::form::DishDraft;
use crate::core::menu::MenuCollection;
use crate::domain::model::{Course, CourseAverages, CourseFilter, DishEntry};
use crate::domain::ports::{ConfigProvider, MenuExporter};
use crate::utils::error::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    AddMenu,
    FilterMenu,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Home => "Home",
            Screen::AddMenu => "AddMenu",
            Screen::FilterMenu => "FilterMenu",
        };
        f.write_str(name)
    }
}

/// Snapshot backing the home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub total_items: usize,
    pub averages: CourseAverages,
    pub dishes: Vec<DishEntry>,
}

/// Snapshot backing the filter screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterView {
    pub selected: CourseFilter,
    pub dishes: Vec<DishEntry>,
}

/// One running app instance. Sole owner of the menu; screens only read
/// snapshots and go through these methods to change it.
#[derive(Debug)]
pub struct Session {
    settings: MenuSettings,
    menu: MenuCollection,
    draft: DishDraft,
    selected: CourseFilter,
    stack: Vec<Screen>,
}

impl Session {
    pub fn new(settings: MenuSettings) -> Self {
        let draft = DishDraft::new(settings.default_course());
        Self {
            settings,
            menu: MenuCollection::new(),
            draft,
            selected: CourseFilter::All,
            stack: vec![Screen::Home],
        }
    }

    /// 以設定檔中的菜色建立工作階段，每一筆都經過 add_dish 的價格檢查
    pub fn with_seed(settings: MenuSettings, seed: &[SeedDish]) -> Result<Self> {
        let mut session = Self::new(settings);
        for dish in seed {
            let course = dish
                .course
                .as_deref()
                .map(|label| label.parse::<Course>())
                .transpose()?;
            session
                .menu
                .add_dish(&dish.dish_name, &dish.description, course, &dish.price)?;
        }
        tracing::debug!("Seeded session with {} dishes", session.menu.len());
        Ok(session)
    }

    pub fn settings(&self) -> &MenuSettings {
        &self.settings
    }

    pub fn current_screen(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::Home)
    }

    pub fn stack(&self) -> &[Screen] {
        &self.stack
    }

    /// Goes to `screen`, popping back to it when it is already on the stack.
    pub fn navigate(&mut self, screen: Screen) {
        if let Some(pos) = self.stack.iter().position(|s| *s == screen) {
            self.stack.truncate(pos + 1);
        } else {
            self.stack.push(screen);
        }
        if screen == Screen::FilterMenu {
            self.selected = CourseFilter::All;
        }
        tracing::debug!("Navigated to {} (depth {})", screen, self.stack.len());
    }

    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn draft(&self) -> &DishDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DishDraft {
        &mut self.draft
    }

    pub fn submit_draft(&mut self) -> Result<DishEntry> {
        match self.draft.submit(&mut self.menu) {
            Ok(entry) => {
                tracing::info!(
                    "➕ Added '{}' to {} ({} items)",
                    entry.dish_name,
                    entry.course,
                    self.menu.len()
                );
                Ok(entry)
            }
            Err(e) => {
                tracing::warn!("Rejected dish '{}': {}", self.draft.dish_name, e);
                Err(e)
            }
        }
    }

    pub fn add_dish(
        &mut self,
        dish_name: &str,
        description: &str,
        course: Option<Course>,
        price_text: &str,
    ) -> Result<DishEntry> {
        self.menu.add_dish(dish_name, description, course, price_text)
    }

    pub fn remove_dish(&mut self, index: usize) -> Result<DishEntry> {
        let removed = self.menu.remove_dish(index)?;
        tracing::info!("➖ Removed '{}' ({} items left)", removed.dish_name, self.menu.len());
        Ok(removed)
    }

    /// Sets the filter screen selection; an unknown label keeps the current one.
    pub fn select_filter(&mut self, label: &str) -> Result<FilterView> {
        self.selected = label.parse()?;
        Ok(self.filtered_view())
    }

    /// Leaves the add screen for home. The list is shared, so nothing is copied.
    pub fn save_menu(&mut self) {
        self.navigate(Screen::Home);
        tracing::info!("💾 Menu saved with {} items", self.menu.len());
    }

    pub fn home_view(&self) -> HomeView {
        HomeView {
            total_items: self.menu.total_items(),
            averages: self.menu.average_price_by_course(),
            dishes: self.menu.dishes().to_vec(),
        }
    }

    pub fn filtered_view(&self) -> FilterView {
        FilterView {
            selected: self.selected,
            dishes: self.menu.filter_by_course(self.selected),
        }
    }

    pub fn dishes(&self) -> &[DishEntry] {
        self.menu.dishes()
    }

    pub fn menu(&self) -> &MenuCollection {
        &self.menu
    }

    pub fn export<E: MenuExporter>(&self, exporter: &E) -> Result<String> {
        exporter.export(self.menu.dishes(), &self.menu.average_price_by_course())
    }

    /// 依設定的貨幣符號與小數位數格式化價格
    pub fn format_price(&self, price: f64) -> String {
        format!(
            "{}{:.*}",
            self.settings.currency_symbol(),
            self.settings.price_decimals(),
            price
        )
    }
}
