use subscription_analytics::aggregate::SubscriptionTotals;
use subscription_analytics::config::AppConfig;
use subscription_analytics::framework::ActorClient;
use subscription_analytics::lifecycle::AnalyticsSystem;
use subscription_analytics::model::{MetricPoint, ProductDraft, RecordId};

/// Full end-to-end run against a real actor.
/// Walks a single product through create, update, totals and delete.
#[tokio::test]
async fn test_full_product_lifecycle() {
    let system = AnalyticsSystem::new(&AppConfig::default()).expect("Default config is valid");
    let client = &system.product_client;

    // Create
    let alpha = client
        .create_product(ProductDraft::new("Alpha", vec![]))
        .await
        .expect("Failed to create product");
    assert!(!alpha.id.is_empty());
    assert_eq!(alpha.product_name, "Alpha");
    assert!(alpha.subscription_metrics.is_empty());

    // Totals of an empty series are all zero
    let totals = client
        .totals(alpha.id.clone())
        .await
        .expect("Failed to read totals")
        .expect("Product not found");
    assert_eq!(totals, SubscriptionTotals::default());

    // Update replaces every field but the id
    let updated = client
        .update_product(
            alpha.id.clone(),
            ProductDraft::new("Alpha2", vec![MetricPoint::new("Jan 2024", 10, 2)]),
        )
        .await
        .expect("Failed to update product")
        .expect("Product not found");
    assert_eq!(updated.id, alpha.id);
    assert_eq!(updated.product_name, "Alpha2");

    let fetched = client
        .get(alpha.id.clone())
        .await
        .expect("Failed to get product")
        .expect("Product not found");
    assert_eq!(fetched, updated);

    let totals = client
        .totals(alpha.id.clone())
        .await
        .expect("Failed to read totals")
        .expect("Product not found");
    assert_eq!(
        totals,
        SubscriptionTotals {
            new_subs: 10,
            cancellations: 2,
            active: 8,
        }
    );

    // Delete, then every lookup misses
    let removed = client
        .delete(alpha.id.clone())
        .await
        .expect("Failed to delete product");
    assert_eq!(removed, Some(updated));
    assert!(client.get(alpha.id.clone()).await.unwrap().is_none());
    assert!(client.totals(alpha.id.clone()).await.unwrap().is_none());
    assert!(client.delete(alpha.id.clone()).await.unwrap().is_none());
    assert!(client.list().await.unwrap().is_empty());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_unknown_and_empty_ids_are_absent() {
    let system = AnalyticsSystem::new(&AppConfig::default()).unwrap();
    let client = &system.product_client;

    client
        .create_product(ProductDraft::new("Kept", vec![]))
        .await
        .unwrap();

    for id in ["", "does-not-exist"] {
        let id = RecordId::from(id);
        assert!(client.get(id.clone()).await.unwrap().is_none());
        assert!(client
            .update_product(id.clone(), ProductDraft::new("X", vec![]))
            .await
            .unwrap()
            .is_none());
        assert!(client.delete(id).await.unwrap().is_none());
    }

    // Nothing was disturbed by the misses
    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].product_name, "Kept");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seeded_system_serves_stub_products() {
    let config = AppConfig {
        seed_stub_products: true,
        ..AppConfig::default()
    };
    let system = AnalyticsSystem::new(&config).unwrap();
    let client = &system.product_client;

    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 7);
    assert_eq!(all[0].product_name, "Stubbed Product Alpha");

    let totals = client
        .totals(RecordId::from("2099affa-5c33-4ad6-b307-17a9785a5d21"))
        .await
        .unwrap()
        .expect("Stub product not found");
    assert_eq!(
        totals,
        SubscriptionTotals {
            new_subs: 24,
            cancellations: 2,
            active: 22,
        }
    );

    // New products land after the stubs
    let created = client
        .create_product(ProductDraft::new("Fresh", vec![]))
        .await
        .unwrap();
    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 8);
    assert_eq!(all.last().map(|p| &p.id), Some(&created.id));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_quick_create_stores_trending_series() {
    let system = AnalyticsSystem::new(&AppConfig::default()).unwrap();
    let client = &system.product_client;

    let quick = client
        .quick_create("Quick", &system.series_generator)
        .await
        .expect("Quick create failed");
    let metrics = &quick.subscription_metrics;
    assert!((11..=12).contains(&metrics.len()));
    assert_eq!(metrics[0].month_year, "Jan 2023");
    for pair in metrics.windows(2) {
        assert!(pair[1].new_subs >= pair[0].new_subs);
        assert!(pair[1].cancellations >= pair[0].cancellations);
    }

    let stored = client.get(quick.id.clone()).await.unwrap();
    assert_eq!(stored, Some(quick.clone()));

    let totals = client.totals(quick.id).await.unwrap().unwrap();
    assert_eq!(totals.active, totals.new_subs as i64 - totals.cancellations as i64);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cloned_clients_share_one_store() {
    let system = AnalyticsSystem::new(&AppConfig::default()).unwrap();

    let mut handles = Vec::new();
    for i in 0..10 {
        let client = system.product_client.clone();
        handles.push(tokio::spawn(async move {
            client
                .create_product(ProductDraft::new(format!("P{i}"), vec![]))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let all = system.product_client.list().await.unwrap();
    assert_eq!(all.len(), 10);
    let mut ids: Vec<_> = all.iter().map(|p| p.id.clone()).collect();
    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    ids.dedup();
    assert_eq!(ids.len(), 10);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let config = AppConfig {
        channel_buffer: 0,
        ..AppConfig::default()
    };
    assert!(AnalyticsSystem::new(&config).is_err());
}
