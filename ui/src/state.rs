use audit_business::{BusinessConfig, FetchAllUsersCommand, UsersListCompute};
use audit_states::StateCtx;

/// The main application state.
#[derive(Debug)]
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(config);
        ctx.record_compute(UsersListCompute::default());
        ctx.record_command(FetchAllUsersCommand);

        Self { ctx }
    }

    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }
}
