use chrono::{TimeZone, Utc};
use flight_checkin::{
    BaggageTag, CheckInError, CheckInService, ErrorKind, FixedClock, Flight, FlightId,
    FlightRepository, InMemoryFlightRepository, PassengerId, StandardBaggagePolicy, Weight,
};
use std::sync::Arc;

async fn service_with_flight(capacity: usize) -> (CheckInService<InMemoryFlightRepository>, FlightId) {
    let repository = InMemoryFlightRepository::new();
    let flight_id = FlightId::new();
    repository
        .insert(Flight::new(flight_id, capacity))
        .await
        .unwrap();

    let clock = Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
    ));
    let service = CheckInService::new(repository, clock, Arc::new(StandardBaggagePolicy::new()));
    (service, flight_id)
}

fn kg(v: f64) -> Weight {
    Weight::from_kilograms(v).unwrap()
}

#[tokio::test]
async fn test_operations_are_persisted() {
    let (service, flight_id) = service_with_flight(2).await;
    let passenger = PassengerId::new();

    service
        .register_passengers(flight_id, &[passenger])
        .await
        .unwrap();
    let seat = service
        .check_in_passenger(flight_id, passenger)
        .await
        .unwrap();
    let tag = service
        .add_baggage(flight_id, passenger, Some(BaggageTag::new("T1")), kg(20.0))
        .await
        .unwrap();

    assert_eq!(seat, "1");
    assert_eq!(tag, BaggageTag::new("T1"));

    let stored = service.flight(flight_id).await.unwrap();
    let stored_passenger = stored.passenger(passenger).unwrap();
    assert_eq!(stored_passenger.seat_number(), Some("1"));
    assert_eq!(stored_passenger.bags().len(), 1);
    assert_eq!(stored.version(), 3);
}

#[tokio::test]
async fn test_unknown_flight_is_not_found() {
    let (service, _) = service_with_flight(1).await;

    let err = service
        .register_passengers(FlightId::new(), &[PassengerId::new()])
        .await
        .unwrap_err();

    assert!(matches!(err, CheckInError::FlightNotFound(_)));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_overbooked_batch_keeps_registered_prefix() {
    let (service, flight_id) = service_with_flight(1).await;
    let first = PassengerId::new();
    let second = PassengerId::new();

    let err = service
        .register_passengers(flight_id, &[first, second])
        .await
        .unwrap_err();

    assert!(matches!(err, CheckInError::Overbooking(id) if id == flight_id));
    let stored = service.flight(flight_id).await.unwrap();
    let registered: Vec<PassengerId> = stored.passengers().iter().map(|p| p.id()).collect();
    assert_eq!(registered, vec![first]);
    assert_eq!(stored.version(), 1);
}

#[tokio::test]
async fn test_overbooked_batch_with_nothing_new_is_not_saved() {
    let (service, flight_id) = service_with_flight(1).await;
    let first = PassengerId::new();
    service
        .register_passengers(flight_id, &[first])
        .await
        .unwrap();

    let err = service
        .register_passengers(flight_id, &[first, PassengerId::new()])
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
    let stored = service.flight(flight_id).await.unwrap();
    assert_eq!(stored.passengers().len(), 1);
    assert_eq!(stored.version(), 1);
}

#[tokio::test]
async fn test_generated_tag_when_none_given() {
    let (service, flight_id) = service_with_flight(1).await;
    let passenger = PassengerId::new();
    service
        .register_passengers(flight_id, &[passenger])
        .await
        .unwrap();
    service
        .check_in_passenger(flight_id, passenger)
        .await
        .unwrap();

    let first = service
        .add_baggage(flight_id, passenger, None, kg(10.0))
        .await
        .unwrap();
    let second = service
        .add_baggage(flight_id, passenger, None, kg(10.0))
        .await
        .unwrap();

    assert_ne!(first, second);
    let stored = service.flight(flight_id).await.unwrap();
    assert_eq!(stored.passenger(passenger).unwrap().bags().len(), 2);
}

#[tokio::test]
async fn test_baggage_rejections() {
    let (service, flight_id) = service_with_flight(1).await;
    let passenger = PassengerId::new();
    service
        .register_passengers(flight_id, &[passenger])
        .await
        .unwrap();

    let err = service
        .add_baggage(flight_id, passenger, None, kg(10.0))
        .await
        .unwrap_err();
    assert!(matches!(err, CheckInError::PassengerNotCheckedIn(_)));

    service
        .check_in_passenger(flight_id, passenger)
        .await
        .unwrap();

    let err = service
        .add_baggage(flight_id, passenger, None, kg(40.0))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    service
        .add_baggage(flight_id, passenger, None, kg(30.0))
        .await
        .unwrap();
    let err = service
        .add_baggage(flight_id, passenger, None, kg(25.0))
        .await
        .unwrap_err();
    assert!(matches!(err, CheckInError::BaggageLimitExceeded { .. }));

    let stored = service.flight(flight_id).await.unwrap();
    assert_eq!(
        stored.passenger(passenger).unwrap().total_bags_weight(),
        kg(30.0)
    );
}

#[tokio::test]
async fn test_stale_copy_cannot_overwrite_newer_state() {
    let (service, flight_id) = service_with_flight(3).await;
    let repository = service.repository();

    let mut stale = repository.get(flight_id).await.unwrap();
    service
        .register_passengers(flight_id, &[PassengerId::new()])
        .await
        .unwrap();

    stale.register_passengers([PassengerId::new()]).unwrap();
    let err = repository.save(&stale).await.unwrap_err();

    assert!(matches!(err, CheckInError::ConcurrencyConflict(id) if id == flight_id));
    assert_eq!(err.kind(), ErrorKind::Conflict);
}
