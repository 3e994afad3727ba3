pub mod phenology;
