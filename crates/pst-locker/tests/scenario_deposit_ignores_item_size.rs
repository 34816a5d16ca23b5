//! Scenario: deposit picks the first FREE cell regardless of size
//!
//! # Invariant under test
//!
//! `deposit` scans cells in seed order and takes the first FREE one. The
//! item's catalog size is never compared with the cell size. Once no cell is
//! FREE, `deposit` fails with `NoFreeCells` and changes nothing.

use pst_locker::{CellStatus, LockerError, OrderStatus, Session};

#[test]
fn small_item_lands_in_large_cell() {
    let mut s = Session::seeded();
    let created = s.create_order("iPhone 17 Pro").unwrap(); // S
    let d = s.deposit(&created.order_id).unwrap();
    assert_eq!(d.cell_id, "C1"); // L
}

#[test]
fn cells_fill_in_seed_order() {
    let mut s = Session::seeded();
    let mut assigned = Vec::new();
    for sku in ["Samsung TV", "Samsung TV", "Samsung TV"] {
        let created = s.create_order(sku).unwrap();
        assigned.push(s.deposit(&created.order_id).unwrap().cell_id);
    }
    assert_eq!(assigned, ["C1", "C2", "C3"]);
}

#[test]
fn full_locker_refuses_deposit_without_side_effects() {
    let mut s = Session::seeded();
    for _ in 0..6 {
        let created = s.create_order("QA Job Offer").unwrap();
        s.deposit(&created.order_id).unwrap();
    }
    assert!(s
        .list_cells()
        .iter()
        .all(|c| c.status == CellStatus::Occupied));

    let extra = s.create_order("QA Job Offer").unwrap();
    let cells_before = s.list_cells().to_vec();
    let err = s.deposit(&extra.order_id).unwrap_err();
    assert_eq!(err, LockerError::NoFreeCells);
    assert_eq!(s.list_cells(), cells_before.as_slice());

    let o = s.get_order(&extra.order_id).unwrap();
    assert_eq!(o.status, OrderStatus::Created);
    assert!(o.cell_id.is_none());
}
