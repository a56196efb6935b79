pub mod centrality;
pub mod components;
pub mod dag;
pub mod path;
pub mod summary;
