pub mod company;
pub mod department;
pub mod personnel;
pub mod textinterface;
