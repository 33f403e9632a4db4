pub mod advertisement;
pub mod link;
pub mod neighbour;
pub mod route;
pub mod table;
