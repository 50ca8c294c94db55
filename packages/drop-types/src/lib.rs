pub mod msg;
pub mod types;

pub use msg::{MerkleRootsResponse, QueryMsg};
pub use types::{CollectionDetails, Config, MintPrices, PhaseFlags, UserDetails};
