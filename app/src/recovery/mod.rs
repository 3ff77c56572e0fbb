mod aggregate;
mod cost;
mod device;
mod energy;
mod projection;
mod sample;
mod service;

pub use aggregate::window_energy;
pub use cost::{CostBreakdown, UnitPriceTable};
pub use device::DeviceRegistry;
pub use energy::{recovered_energy, sample_energy};
pub use projection::{DEFAULT_PROJECTION_DAYS, project_yearly};
pub use sample::{ChannelPair, Sample};
pub use service::{DailyReport, InstantPrice, QueryError, RealtimeSnapshot, RecoveryApi, WindowTotal};
