pub mod attention;
pub mod concentration;
pub mod mechanical;
pub mod numerical;
pub mod reasoning;
pub mod spatial;
pub mod spelling;
pub mod verbal;
