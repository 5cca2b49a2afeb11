pub mod models;
pub mod cart;
pub mod customer;
pub mod notify;
pub mod shipping;
pub mod checkout;

pub use models::{Manifest, Receipt, ReceiptLine, ShippableLine};
pub use cart::{Cart, CartError};
pub use customer::{Customer, CustomerError};
pub use notify::{Notifier, RecordingNotifier, StdoutNotifier, TracingNotifier};
pub use shipping::ShippingService;
pub use checkout::{Checkout, CheckoutError};
