pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        fixtures::{applicant::factory as applicant_factory, auth::factory as auth_factory},
        test_setup_with_applicant_tables, test_setup_with_tables, TestBuilder, TestError,
        TestSetup,
    };
}
