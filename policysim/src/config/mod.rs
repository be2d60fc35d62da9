mod policysim_configuration;

pub use policysim_configuration::PolicySimConfiguration;
