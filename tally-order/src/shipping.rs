use crate::models::{Manifest, ShippableLine};
use crate::notify::Notifier;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Hands shippable lines to the carrier as a printed manifest
pub struct ShippingService {
    notifier: Arc<dyn Notifier>,
}

impl ShippingService {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub fn ship(&self, items: &[ShippableLine]) -> Manifest {
        let total_weight = items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.weight));
        let manifest = Manifest {
            items: items.to_vec(),
            total_weight,
        };

        tracing::debug!(
            parcels = items.len(),
            total_weight = %total_weight,
            "Dispatching shipment"
        );
        self.notifier.notify(&manifest.to_string());
        manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;

    #[test]
    fn test_ship_emits_manifest() {
        let notifier = Arc::new(RecordingNotifier::new());
        let service = ShippingService::new(notifier.clone());

        let manifest = service.ship(&[
            ShippableLine::new(1, "TV", Decimal::from(5000)).unwrap(),
            ShippableLine::new(3, "Biscuits", Decimal::from(700)).unwrap(),
        ]);

        assert_eq!(manifest.total_weight, Decimal::from(7100));
        assert_eq!(manifest.total_weight_kg(), Decimal::new(71, 1));

        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("3x Biscuits 2100g"));
        assert!(messages[0].ends_with("Total package weight 7.1kg"));
    }

    #[test]
    fn test_ship_nothing() {
        let notifier = Arc::new(RecordingNotifier::new());
        let service = ShippingService::new(notifier.clone());

        let manifest = service.ship(&[]);

        assert_eq!(manifest.total_weight, Decimal::ZERO);
        assert_eq!(
            notifier.messages(),
            vec!["** Shipment notice **\nTotal package weight 0kg".to_string()]
        );
    }
}
