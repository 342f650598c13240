use mapbridge::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Batch {
    markers: Vec<Marker>,
    circles: Vec<CircleMarker>,
    polylines: Vec<Polyline>,
}

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-85.0..85.0f64, -180.0..180.0f64).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
}

fn batch() -> impl Strategy<Value = Batch> {
    let id = "[a-f]{1,2}";
    (
        prop::collection::vec((id, coordinate()), 0..5),
        prop::collection::vec((id, coordinate()), 0..5),
        prop::collection::vec((id, prop::collection::vec(coordinate(), 2..4)), 0..3),
    )
        .prop_map(|(markers, circles, polylines)| Batch {
            markers: markers.into_iter().map(|(id, c)| Marker::new(id, c)).collect(),
            circles: circles.into_iter().map(|(id, c)| CircleMarker::new(id, c)).collect(),
            polylines: polylines.into_iter().map(|(id, cs)| Polyline::new(id, cs)).collect(),
        })
}

fn distinct_ids(batch: &Batch) -> Vec<String> {
    let mut ids: Vec<String> = batch
        .polylines
        .iter()
        .map(|p| p.id.clone())
        .chain(batch.markers.iter().map(|m| m.id.clone()))
        .chain(batch.circles.iter().map(|c| c.id.clone()))
        .collect();
    ids.sort();
    ids.dedup();
    ids
}

proptest! {
    #[test]
    fn registry_holds_only_the_last_batch(batches in prop::collection::vec(batch(), 1..6)) {
        let container = MapHandle::new("sequence");
        let mut facade = MapFacade::new(NativeBackend::new());
        facade
            .create_map(&container, &MapOptions::default(), &MapControlOptions::none(), &[], &[], &[], &[])
            .unwrap();

        for batch in &batches {
            facade.set_layers(&container, &batch.markers, &batch.circles, &batch.polylines);
        }

        let last = batches.last().unwrap();
        let instance = facade.maps().get(&container).unwrap();
        let mut ids: Vec<String> = instance.layers().ids().map(str::to_string).collect();
        ids.sort();

        prop_assert_eq!(&ids, &distinct_ids(last));
        prop_assert_eq!(facade.backend().layers_on(instance.surface()).len(), ids.len());
    }
}
