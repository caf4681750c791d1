//! Checkout: the order wizard model and its Dioxus rendering.
//!
//! The model types (`order`, `shipping`, `payment`, `confirmation`,
//! `wizard`) are plain Rust with no UI dependency; `view` renders them and
//! `scroll_lock` owns the one document-level side effect.

pub mod confirmation;
pub mod order;
pub mod payment;
pub mod scroll_lock;
pub mod shipping;
pub mod validation;
pub mod view;
pub mod wizard;

pub use confirmation::{ConfirmationSummary, OrderNumber, ShareTarget};
pub use order::{Cents, ColorSet, OrderConfig, Quantity, UnitColor, UnitSlot, UNIT_PRICE};
pub use payment::{CardDetails, CardField, PaymentMethod, PaymentPanel, PaymentSelection};
pub use scroll_lock::{DocumentScroll, ScrollLock, ScrollTarget};
pub use shipping::{ShippingAddress, ShippingField};
pub use validation::{EmailPolicy, FieldError, FieldErrors, FormField};
pub use view::{CheckoutPanel, Stepper, WizardSteps};
pub use wizard::{CheckoutConfig, CheckoutWizard, ResetPolicy, Step, StepStatus, Transition};
