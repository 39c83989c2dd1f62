mod messaging;

pub use messaging::{
    GatewayError, IMessagingGateway, InMemoryMessagingGateway, TwilioWhatsAppGateway,
};
