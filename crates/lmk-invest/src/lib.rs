//! lmk-invest
//!
//! Read-only quotes for the investor's two money decisions:
//! - buying quotas of an opportunity (cost, payout, profit, affordability)
//! - leaving a position early on the secondary market (fee, net payout)
//!
//! Both are single-shot pure calculations. Committing either decision
//! (moving money, closing the position) belongs to the caller.

pub mod exit;
pub mod projector;

pub use exit::{quote_exit, ExitPolicy, ExitPolicyError, ExitQuote, Position, EXIT_ADMIN_FEE};
pub use projector::{
    max_affordable_quotas, project, InvestmentProjection, OpportunityTerms, ProjectionError,
};
