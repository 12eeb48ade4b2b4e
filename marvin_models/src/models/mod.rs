pub use self::account::*;
pub use self::compute::*;
pub use self::infra::*;
pub use self::misc::*;
pub use self::network::*;
pub use self::offering::*;
pub use self::storage::*;

mod account;
mod compute;
mod de;
mod infra;
mod misc;
mod network;
mod offering;
mod storage;
