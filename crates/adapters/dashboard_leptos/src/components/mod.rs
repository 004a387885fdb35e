mod banner_list;
mod nav;
mod router_card;
mod routing_table;

pub use banner_list::{BannerList, push_banner};
pub use nav::Nav;
pub use router_card::RouterCardView;
pub use routing_table::RoutingTableView;
