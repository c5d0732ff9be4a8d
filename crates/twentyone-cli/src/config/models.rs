use twentyonestep::core::units::Time;
use twentyonestep::engine::config::ProtocolConfig;

/// Fully resolved settings for one CLI invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub protocol: ProtocolConfig,
    /// Step size the schedule is planned and rehearsed with.
    pub timestep: Time,
}
