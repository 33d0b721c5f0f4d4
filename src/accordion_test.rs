use super::*;

#[test]
fn starts_all_closed() {
    let faq = Accordion::new(3);
    assert_eq!(faq.open_item(), None);
    assert!((0..3).all(|i| !faq.is_open(i)));
}

#[test]
fn activating_closed_item_opens_it() {
    let mut faq = Accordion::new(3);
    assert_eq!(faq.activate(1), Some(1));
    assert!(faq.is_open(1));
}

#[test]
fn opening_b_closes_a() {
    let mut faq = Accordion::new(3);
    faq.activate(0);
    faq.activate(2);
    assert!(!faq.is_open(0));
    assert!(faq.is_open(2));
    assert_eq!((0..3).filter(|&i| faq.is_open(i)).count(), 1);
}

#[test]
fn reactivating_open_item_closes_everything() {
    let mut faq = Accordion::new(3);
    faq.activate(1);
    assert_eq!(faq.activate(1), None);
    assert!((0..3).all(|i| !faq.is_open(i)));
}

#[test]
fn out_of_range_is_ignored() {
    let mut faq = Accordion::new(2);
    faq.activate(0);
    assert_eq!(faq.activate(5), Some(0));
}

#[test]
fn empty_group_never_opens() {
    let mut faq = Accordion::new(0);
    assert_eq!(faq.activate(0), None);
}
