//! Departments grid.

use storefront_core::LoadState;
use storefront_data::{CatalogSource, Department};
use storefront_streaming::html::{encode_query_value, escape};

use crate::context::PageContext;

/// Placeholders shown while the taxonomy loads.
pub const DEPARTMENT_SKELETONS: usize = 8;

/// Category chips shown per department card.
pub const MAX_CATEGORY_CHIPS: usize = 3;

/// Icon set for department cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentIcon {
    Monitor,
    Laptop,
    Cpu,
    MonitorCheck,
    Smartphone,
    Camera,
    Wifi,
    Printer,
    FileText,
    Mouse,
    HardDrive,
    Armchair,
}

impl DepartmentIcon {
    /// Map an icon key. Unknown or missing keys get `Monitor`.
    pub fn from_key(key: Option<&str>) -> Self {
        match key.unwrap_or_default() {
            "Laptop" => Self::Laptop,
            "Cpu" => Self::Cpu,
            "MonitorCheck" => Self::MonitorCheck,
            "Smartphone" => Self::Smartphone,
            "Camera" => Self::Camera,
            "Wifi" => Self::Wifi,
            "Printer" => Self::Printer,
            "FileText" => Self::FileText,
            "Mouse" => Self::Mouse,
            "HardDrive" => Self::HardDrive,
            "Armchair" => Self::Armchair,
            _ => Self::Monitor,
        }
    }

    /// CSS class suffix.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Monitor => "monitor",
            Self::Laptop => "laptop",
            Self::Cpu => "cpu",
            Self::MonitorCheck => "monitor-check",
            Self::Smartphone => "smartphone",
            Self::Camera => "camera",
            Self::Wifi => "wifi",
            Self::Printer => "printer",
            Self::FileText => "file-text",
            Self::Mouse => "mouse",
            Self::HardDrive => "hard-drive",
            Self::Armchair => "armchair",
        }
    }
}

/// Department grid state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentsGrid {
    pub state: LoadState<Vec<Department>>,
}

impl DepartmentsGrid {
    pub fn loaded(departments: Vec<Department>) -> Self {
        Self {
            state: LoadState::Loaded(departments),
        }
    }

    /// Loaded departments; empty while loading.
    pub fn departments(&self) -> &[Department] {
        self.state.loaded().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn render(&self, ctx: PageContext) -> String {
        render_departments(self, ctx)
    }
}

/// Fetch the taxonomy once. Failures and non-list payloads yield no departments.
pub async fn load_departments<C>(source: &C) -> Vec<Department>
where
    C: CatalogSource + ?Sized,
{
    match source.mega_menu_taxonomy().await {
        Ok(payload) => {
            if !payload.is_list() {
                tracing::debug!("taxonomy payload is not a list, showing no departments");
            }
            payload.into_departments()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load departments grid taxonomy");
            Vec::new()
        }
    }
}

/// Link to the shop filtered by department.
pub fn department_href(slug: &str) -> String {
    format!("/shop?department={}", encode_query_value(slug))
}

fn render_department_card(dept: &Department, ctx: PageContext) -> String {
    let chips: String = dept
        .categories
        .iter()
        .take(MAX_CATEGORY_CHIPS)
        .map(|cat| format!(r#"<span class="chip">{}</span>"#, escape(cat.name().text(ctx.locale))))
        .collect();

    format!(
        r#"<a class="dept-card" href="{href}" data-department="{id}">
    <span class="dept-icon icon-{icon}"></span>
    <div class="dept-body">
        <h3>{name}</h3>
        <div class="chips">{chips}</div>
    </div>
    <span class="arrow"></span>
</a>"#,
        href = escape(&department_href(&dept.slug)),
        id = escape(dept.id.as_str()),
        icon = DepartmentIcon::from_key(dept.icon.as_deref()).name(),
        name = escape(dept.name().text(ctx.locale)),
        chips = chips,
    )
}

/// Render the grid: skeletons while loading, cards once loaded.
pub fn render_departments(grid: &DepartmentsGrid, ctx: PageContext) -> String {
    let (state, body) = match &grid.state {
        LoadState::Loading => ("loading", render_departments_skeleton()),
        LoadState::Loaded(rows) => (
            "loaded",
            rows.iter().map(|d| render_department_card(d, ctx)).collect(),
        ),
    };

    format!(
        r#"<section class="departments" data-section="departments" data-state="{state}">
    <div class="section-header split">
        <div>
            <h2>{title}</h2>
            <p>{subtitle}</p>
        </div>
        <a href="/shop" class="view-all">{view_all}</a>
    </div>
    <div class="dept-grid">{body}</div>
</section>"#,
        state = state,
        title = escape(ctx.t.sections.departments),
        subtitle = ctx.pick("Parcourez nos catégories", "تصفح فئاتنا"),
        view_all = escape(ctx.t.sections.view_all),
        body = body,
    )
}

/// Placeholder cards.
pub fn render_departments_skeleton() -> String {
    r#"<div class="dept-card skeleton"></div>"#.repeat(DEPARTMENT_SKELETONS)
}
