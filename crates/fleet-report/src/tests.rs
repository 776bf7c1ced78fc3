//! Unit tests for fleet-report.

#[cfg(test)]
mod helpers {
    use fleet_core::{Location, VehicleId};
    use fleet_vehicle::{Plane, Train};

    pub fn loc(name: &str) -> Location {
        Location::new(name).unwrap()
    }

    pub fn plane(id: u32, max_height: u32) -> Plane {
        Plane::new(VehicleId(id), loc("A"), loc("B"), max_height)
    }

    pub fn train(id: u32, stations: u32, max_passengers: u32) -> Train {
        Train::new(VehicleId(id), loc("A"), loc("B"), stations, max_passengers).unwrap()
    }

    pub fn heights(planes: &[Plane]) -> Vec<u32> {
        planes.iter().map(Plane::max_height).collect()
    }
}

// ── Sorting ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sorting {
    use fleet_core::FleetError;
    use fleet_vehicle::{Movable, Vehicle};

    use super::helpers::*;
    use crate::{ReportError, sort_transport, sort_vehicles};

    #[test]
    fn planes_ascending_by_height() {
        let mut planes = vec![plane(1, 300), plane(2, 1500), plane(3, 800)];
        sort_transport(&mut planes);
        assert_eq!(heights(&planes), [300, 800, 1500]);
    }

    #[test]
    fn trains_ascending_by_passengers() {
        let mut trains = vec![train(1, 2, 400), train(2, 3, 50), train(3, 1, 250)];
        sort_transport(&mut trains);
        let ids: Vec<u32> = trains.iter().map(|t| t.id().get()).collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut planes = vec![plane(1, 800), plane(2, 300), plane(3, 800), plane(4, 300)];
        sort_transport(&mut planes);
        let ids: Vec<u32> = planes.iter().map(|p| p.id().get()).collect();
        assert_eq!(ids, [2, 4, 1, 3]);
    }

    #[test]
    fn empty_and_single_are_noops() {
        let mut none: Vec<fleet_vehicle::Plane> = vec![];
        sort_transport(&mut none);
        assert!(none.is_empty());

        let mut one = vec![plane(1, 10)];
        sort_transport(&mut one);
        assert_eq!(heights(&one), [10]);
    }

    #[test]
    fn homogeneous_vehicles_sort() {
        let mut fleet: Vec<Vehicle> = vec![plane(1, 300).into(), plane(2, 1500).into(), plane(3, 800).into()];
        sort_vehicles(&mut fleet).unwrap();
        let caps: Vec<u32> = fleet.iter().map(Vehicle::capacity).collect();
        assert_eq!(caps, [300, 800, 1500]);
    }

    #[test]
    fn mixed_vehicles_rejected_untouched() {
        let mut fleet: Vec<Vehicle> = vec![plane(1, 1500).into(), train(2, 2, 10).into(), plane(3, 300).into()];
        let before = fleet.clone();
        let err = sort_vehicles(&mut fleet).unwrap_err();
        assert!(matches!(err, ReportError::Fleet(FleetError::KindMismatch { .. })));
        assert!(err.to_string().starts_with("cannot compare Plane 1 with Train 2"));
        assert_eq!(fleet, before);
    }
}

// ── Text report ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod report {
    use fleet_core::{Location, VehicleId};
    use fleet_vehicle::{Movable, Plane, Vehicle};

    use super::helpers::*;
    use crate::{report_all, VehicleRow};

    #[test]
    fn empty_fleet_is_empty_string() {
        let fleet: Vec<Vehicle> = vec![];
        assert_eq!(report_all(&fleet), "");
    }

    #[test]
    fn single_plane_line() {
        let fleet = vec![plane(7, 1200)];
        assert_eq!(report_all(&fleet), "Plane 7 going from A to B. Currently in A");
    }

    #[test]
    fn mixed_fleet_keeps_order() {
        let mut t = train(3, 4, 200);
        t.advance();
        t.advance();
        let fleet: Vec<Vehicle> = vec![t.into(), plane(7, 1200).into(), train(1, 2, 90).into()];
        assert_eq!(
            report_all(&fleet),
            "Train 3 going from A to B. Currently in station 2 between A and B.\n\
             Plane 7 going from A to B. Currently in A\n\
             Train 1 going from A to B. Currently in A"
        );
    }

    #[test]
    fn reflects_moves() {
        let mut fleet = vec![plane(7, 1200)];
        fleet[0].advance();
        assert_eq!(report_all(&fleet), "Plane 7 going from B to A. Currently in B");
    }

    #[test]
    fn boxed_trait_objects() {
        let fleet: Vec<Box<dyn Movable>> = vec![Box::new(plane(1, 10)), Box::new(train(2, 3, 10))];
        let report = report_all(&fleet);
        assert_eq!(report.lines().count(), 2);
        assert!(report.starts_with("Plane 1 "));
    }

    #[test]
    fn borrowed_trait_objects() {
        let mut p = plane(7, 1200);
        let mut t = train(3, 2, 100);
        let mut fleet: Vec<&mut dyn Movable> = vec![&mut p, &mut t];
        for v in fleet.iter_mut() {
            v.advance();
        }
        assert_eq!(
            report_all(&fleet),
            "Plane 7 going from B to A. Currently in B\n\
             Train 3 going from A to B. Currently in station 1 between A and B."
        );
        drop(fleet);
        assert_eq!(p.source(), &loc("B"));
    }

    #[test]
    fn does_not_mutate() {
        let fleet = vec![Vehicle::from(train(1, 3, 10))];
        let before = fleet.clone();
        let _ = report_all(&fleet);
        assert_eq!(fleet, before);
    }

    #[test]
    fn multi_word_locations_verbatim() {
        let p = Plane::new(
            VehicleId(12),
            Location::new("Ben Gurion").unwrap(),
            Location::new("JFK Terminal 4").unwrap(),
            900,
        );
        let row = VehicleRow::from_movable(&p);
        assert_eq!(row.kind, "Plane");
        assert_eq!(row.id, 12);
        assert_eq!(
            row.report_line(),
            "Plane 12 going from Ben Gurion to JFK Terminal 4. Currently in Ben Gurion"
        );
    }
}

// ── Writers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod writers {
    use tempfile::TempDir;

    use super::helpers::*;
    use crate::csv::{CsvWriter, REPORT_FILE};
    use crate::text::TextWriter;
    use crate::writer::ReportWriter;
    use crate::VehicleRow;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn rows() -> Vec<VehicleRow> {
        vec![
            VehicleRow::from_movable(&plane(7, 1200)),
            VehicleRow::from_movable(&train(3, 2, 100)),
        ]
    }

    #[test]
    fn text_writer_blocks() {
        let mut w = TextWriter::new(Vec::new());
        w.write_rows(0, &rows()).unwrap();
        w.write_rows(1, &[]).unwrap();
        w.finish().unwrap();
        let out = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(
            out,
            "# tick 0\n\
             Plane 7 going from A to B. Currently in A\n\
             Train 3 going from A to B. Currently in A\n\
             # tick 1\n"
        );
    }

    #[test]
    fn csv_file_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(REPORT_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(REPORT_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "kind", "id", "source", "destination", "current_location"]);
    }

    #[test]
    fn csv_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_rows(5, &rows()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(REPORT_FILE)).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 2);
        assert_eq!(&read_rows[0][0], "5");     // tick
        assert_eq!(&read_rows[0][1], "Plane"); // kind
        assert_eq!(&read_rows[0][2], "7");     // id
        assert_eq!(&read_rows[1][1], "Train");
        assert_eq!(&read_rows[1][5], "A");     // current_location
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_errors() {
        let dir = tmp();
        let result = CsvWriter::new(&dir.path().join("does-not-exist"));
        assert!(result.is_err());
    }
}
