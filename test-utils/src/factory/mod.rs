//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the
//! values they care about. Each entity has a `*Factory` builder for customization
//! and a `create_*` shorthand for the defaults.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let camper = factory::create_camper(&db).await?;
//! let activity = factory::create_activity(&db).await?;
//! let signup = factory::create_signup(&db, camper.id, activity.id).await?;
//!
//! let camper = factory::camper::CamperFactory::new(&db)
//!     .name("Alex")
//!     .age(12)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `camper` - Create camper entities
//! - `activity` - Create activity entities
//! - `signup` - Create signup entities joining a camper and an activity
//! - `helpers` - Unique id generation and entities with dependencies

pub mod activity;
pub mod camper;
pub mod helpers;
pub mod signup;

pub use activity::create_activity;
pub use camper::create_camper;
pub use helpers::create_signup_with_dependencies;
pub use signup::create_signup;
