//! Business services containing domain logic and use cases.

pub mod export;
pub mod notification;
pub mod printing;

// Re-export commonly used types
pub use export::banned_inmates_to_csv;
pub use notification::{
    DeliveryHealth, DeliveryResult, EmailServiceTrait, NotificationService,
    NotificationServiceConfig,
};
pub use printing::{render_card_document, CardLayout, PrintCardOptions};
