pub mod detail;
pub mod filters;
pub mod navbar;
pub mod object_list;
pub mod page;
pub mod reference;
pub mod scatter;
pub mod stats;

pub use detail::DetailPanel;
pub use filters::FilterBar;
pub use navbar::Navbar;
pub use object_list::ObjectList;
pub use page::Page;
pub use reference::{DiscovererTable, ObservatoryTable};
pub use scatter::ScatterChart;
pub use stats::StatsCards;
