pub mod channel_notifier;
pub mod tracing_notifier;

pub use channel_notifier::ChannelNotifier;
pub use tracing_notifier::TracingNotifier;
