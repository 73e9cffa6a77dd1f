use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::memory::publisher::MemoryPublisher;

pub(crate) fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => {
            Box::new(LogPublisher::new())
        }
        GatewayPublisherVia::Memory => {
            Box::new(MemoryPublisher::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_publish_through_each_gateway() {
        let metadata = HashMap::from([("branch_id".to_string(), "test".to_string())]);
        let event = DomainEvent::added("book_added", "catalog", "isbn", &metadata, &"payload").expect("build event");
        for via in [GatewayPublisherVia::Logs, GatewayPublisherVia::Memory] {
            let publisher = create_publisher(via);
            publisher.publish(&event).await.expect("should publish event");
        }
    }
}
