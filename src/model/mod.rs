pub use self::{
    record::{Stat, UserRecord},
    session::Session,
};

mod record;
mod session;
