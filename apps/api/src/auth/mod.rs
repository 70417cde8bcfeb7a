// Demo sign-in: roles, the session record, its storage, and the route guards.

pub mod guard;
pub mod handlers;
pub mod role;
pub mod service;
pub mod session;
pub mod storage;
