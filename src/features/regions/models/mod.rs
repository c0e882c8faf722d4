mod region;

pub use region::{ProvinceGroup, Region, RegionDetail};
