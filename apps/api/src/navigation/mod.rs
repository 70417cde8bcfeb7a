// Routing table, role-filtered nav links, and the guided tour built on them.

pub mod handlers;
pub mod links;
pub mod routes;
pub mod tour;
pub mod visits;
