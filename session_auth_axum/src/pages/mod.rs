mod index;
mod login;
mod logout;
mod router;

pub(crate) use router::router;
