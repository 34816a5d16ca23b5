//! Scenario: expiry and courier collection
//!
//! # Invariant under test
//!
//! - `return_expire` moves STORED → EXPIRED and the cell to RETURN_PENDING,
//!   and may be repeated while EXPIRED.
//! - `return_collect` moves EXPIRED → RETURNED and clears the cell reference
//!   but leaves the cell RETURN_PENDING, so it is lost to future deposits.

use pst_locker::{CellStatus, LockerError, OrderStatus, Session};

#[test]
fn collected_cell_is_never_reused() {
    let mut s = Session::seeded();
    let first = s.create_order("Samsung TV").unwrap();
    assert_eq!(s.deposit(&first.order_id).unwrap().cell_id, "C1");

    s.return_expire(&first.order_id).unwrap();
    s.return_expire(&first.order_id).unwrap();
    assert_eq!(s.list_cells()[0].status, CellStatus::ReturnPending);

    assert!(s.return_collect(&first.order_id).unwrap().opened);
    let o = s.get_order(&first.order_id).unwrap();
    assert_eq!(o.status, OrderStatus::Returned);
    assert!(o.cell_id.is_none());
    assert!(o.expired_marked);
    assert_eq!(s.list_cells()[0].status, CellStatus::ReturnPending);

    let second = s.create_order("Samsung TV").unwrap();
    assert_eq!(s.deposit(&second.order_id).unwrap().cell_id, "C2");
}

#[test]
fn returned_order_cannot_be_expired_or_picked_up() {
    let mut s = Session::seeded();
    let created = s.create_order("Samsung TV").unwrap();
    s.deposit(&created.order_id).unwrap();
    s.return_expire(&created.order_id).unwrap();
    s.return_collect(&created.order_id).unwrap();

    assert!(matches!(
        s.return_expire(&created.order_id),
        Err(LockerError::InvalidState(_))
    ));
    assert!(matches!(
        s.pickup(&created.order_id, &created.code),
        Err(LockerError::InvalidState(_))
    ));
}

#[test]
fn expired_order_cannot_be_picked_up() {
    let mut s = Session::seeded();
    let created = s.create_order("Samsung TV").unwrap();
    s.deposit(&created.order_id).unwrap();
    s.return_expire(&created.order_id).unwrap();
    assert!(matches!(
        s.pickup(&created.order_id, &created.code),
        Err(LockerError::InvalidState(_))
    ));
}
