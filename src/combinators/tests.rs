#![cfg(test)]

use std::cell::{Cell, RefCell};

use super::*;
use crate::enumeration::{Count, Cursor, Enum, empty, from_fn, init, of_iter, repeat, singleton};
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn drain<C: Cursor>(seq: Enum<C>) -> Vec<C::Item> {
    seq.fold(Vec::new(), |mut out, item| {
        out.push(item);
        out
    })
}

/// A generator over 0..n which can't be cloned, recording how many elements it produced.
fn counted_source(n: usize, produced: &Cell<usize>) -> Enum<impl Cursor<Item = usize> + '_> {
    from_fn(move || {
        let next = produced.get();
        produced.set(next + 1);
        (next < n).then_some(next)
    })
}

#[test]
fn test_map_is_lazy() {
    let log = RefCell::new(Vec::new());
    let mut seq = of_iter(1..=3).map(|i| {
        log.borrow_mut().push(i);
        i * 10
    });
    assert!(log.borrow().is_empty(), "Constructing a map must not call the function.");

    assert_eq!(seq.next(), Some(10));
    assert_eq!(*log.borrow(), [1], "Pulling should call the function for that element only.");

    assert_eq!(seq.fast_forward(1), 1);
    assert_eq!(*log.borrow(), [1], "Skipped elements are never mapped.");

    assert_eq!(seq.next(), Some(30));
    assert_eq!(seq.next(), None);
    assert_eq!(*log.borrow(), [1, 3]);
}

#[test]
fn test_map_keeps_count() {
    let seq = init(4, |i| i).map(|i| i + 1);
    assert_eq!(seq.count(), Count::Known(4), "Mapping doesn't change the number of elements.");
    assert_eq!(drain(seq), [1, 2, 3, 4]);
}

#[test]
fn test_filter_evaluates_once() {
    let calls = Cell::new(0);
    let seq = of_iter(0..10).filter(|i| {
        calls.set(calls.get() + 1);
        i % 3 == 0
    });
    assert_eq!(calls.get(), 0, "Constructing a filter must not evaluate the predicate.");
    assert_eq!(seq.count(), Count::Unknown, "A filter can't know how much it will keep.");
    assert_eq!(drain(seq), [0, 3, 6, 9]);
    assert_eq!(calls.get(), 10, "The predicate runs exactly once per source element.");

    assert_eq!(empty::<u8>().filter(|_| true).count(), Count::Known(0));
}

#[test]
fn test_filter_map() {
    let seq = of_iter(["1", "x", "3"]).filter_map(|s| s.parse::<u32>().ok());
    assert_eq!(drain(seq), [1, 3]);
}

#[test]
fn test_concat_completeness() {
    let seq = of_iter(vec![1, 2]).concat(init(3, |i| i as i32 + 10));
    assert_eq!(seq.count(), Count::Known(5), "Known counts should add up.");
    assert_eq!(drain(seq), [1, 2, 10, 11, 12]);

    let seq = empty().concat(singleton('a')).concat(empty());
    assert_eq!(drain(seq), ['a'], "Empty Enums shouldn't disturb concatenation.");

    let mut seq = of_iter([1, 2, 3]).concat(of_iter([4, 5, 6]));
    assert_eq!(seq.fast_forward(4), 4, "Fast-forwarding should cross into the second Enum.");
    assert_eq!(drain(seq), [5, 6]);
}

#[test]
fn test_concat_is_lazy() {
    let produced = Cell::new(0);
    let mut seq = of_iter([100, 200]).concat(counted_source(2, &produced));
    assert_eq!(seq.next(), Some(100));
    assert_eq!(seq.next(), Some(200));
    assert_eq!(produced.get(), 0, "The second Enum shouldn't be touched until it's needed.");
    assert_eq!(drain(seq), [0, 1]);
}

#[test]
fn test_flatten() {
    let seq = of_iter(1..=3).map(|n| init(n, move |i| n * 10 + i)).flatten();
    assert_eq!(drain(seq), [10, 20, 21, 30, 31, 32]);

    let seq = of_iter([vec![], vec![1], vec![]]).map(of_iter).flatten();
    assert_eq!(drain(seq), [1], "Empty inner Enums should be skipped.");
}

#[test]
fn test_zip() {
    let seq = of_iter(['a', 'b', 'c']).zip(init(5, |i| i));
    assert_eq!(seq.count(), Count::Known(3), "Zipping should have the shorter count.");
    assert_eq!(drain(seq), [('a', 0), ('b', 1), ('c', 2)]);

    let seq = of_iter(['a', 'b']).zip(repeat(0));
    assert_eq!(seq.count(), Count::Unknown, "An unknown count might be the shorter one.");
    assert_eq!(drain(seq), [('a', 0), ('b', 0)]);
}

#[test]
fn test_combine_known_mismatch() {
    let result = of_iter([1, 2, 3]).combine(of_iter(["a", "b"]));
    assert_eq!(
        result.err(),
        Some(LengthMismatch { index: 2 }),
        "Mismatched known lengths should be reported before any pull."
    );

    let seq = of_iter([1, 2]).combine(of_iter(["a", "b"])).expect("lengths are equal");
    let expected: Vec<Result<(i32, &str), LengthMismatch>> = vec![Ok((1, "a")), Ok((2, "b"))];
    assert_eq!(drain(seq), expected);
}

#[test]
fn test_combine_lazy_mismatch() {
    let produced = Cell::new(0);
    let mut seq = of_iter([1, 2, 3])
        .combine(counted_source(2, &produced))
        .expect("unknown lengths can't mismatch up front");
    assert_eq!(seq.next(), Some(Ok((1, 0))));
    assert_eq!(seq.next(), Some(Ok((2, 1))));
    assert_eq!(
        seq.next(),
        Some(Err(LengthMismatch { index: 2 })),
        "The mismatch should surface at the first pull where it is observable."
    );
    assert_eq!(seq.next(), None, "After reporting a mismatch the Enum is exhausted.");
}

#[test]
fn test_windows() {
    let seq = of_iter(1..=5).windows(3);
    assert_eq!(seq.count(), Count::Known(3));
    assert_eq!(drain(seq), [vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);

    let mut seq = of_iter(1..=4).windows(2);
    seq.next();
    assert_eq!(seq.count(), Count::Known(2), "Each remaining element completes one window.");

    let seq = of_iter(1..=2).windows(3);
    assert_eq!(seq.count(), Count::Known(0));
    assert_eq!(drain(seq), Vec::<Vec<i32>>::new(), "Too few elements produce no windows.");

    let seq = of_iter(1..=3).windows(usize::MAX / 2);
    assert_eq!(seq.count(), Count::Known(0));
    assert_eq!(
        drain(seq), Vec::<Vec<i32>>::new(),
        "A huge window size is valid and shouldn't be allocated up front."
    );

    assert_panics!({
        of_iter(1..=2).windows(0);
    });
}

#[test]
fn test_take_and_skip() {
    let seq = init(10, |i| i).take(3);
    assert_eq!(seq.count(), Count::Known(3), "Taking should bound the count.");
    assert_eq!(drain(seq), [0, 1, 2]);
    assert_eq!(drain(repeat('x').take(3)), ['x', 'x', 'x'], "Taking makes infinite Enums finite.");

    let seq = of_iter(0..10).skip(7);
    assert_eq!(seq.count(), Count::Known(3), "Skipping should be reflected in the count.");
    assert_eq!(drain(seq), [7, 8, 9]);

    let calls = Cell::new(0);
    let seq = init(100, |i| {
        calls.set(calls.get() + 1);
        i
    })
    .skip(98);
    assert_eq!(drain(seq), [98, 99]);
    assert_eq!(calls.get(), 2, "Skip should fast-forward rather than pull.");

    let seq = of_iter(0..3).skip(5);
    assert_eq!(drain(seq), Vec::<i32>::new());
}

#[test]
fn test_take_while_and_skip_while() {
    let seq = of_iter([1, 2, 5, 1]).take_while(|i| *i < 3);
    assert_eq!(drain(seq), [1, 2]);

    let seq = of_iter([1, 2, 5, 1]).skip_while(|i| *i < 3);
    assert_eq!(drain(seq), [5, 1], "Once an element fails, nothing else is skipped.");
}

#[test]
fn test_indexed_and_cycle() {
    let mut seq = of_iter(['a', 'b', 'c', 'd']).indexed();
    assert_eq!(seq.fast_forward(2), 2);
    assert_eq!(drain(seq), [(2, 'c'), (3, 'd')], "Indices should account for skipped elements.");

    let seq = of_iter([1, 2]).cycle().take(5);
    assert_eq!(drain(seq), [1, 2, 1, 2, 1]);

    let seq = empty::<u8>().cycle();
    assert_eq!(seq.count(), Count::Known(0));
    assert_eq!(drain(seq), Vec::<u8>::new(), "Cycling nothing is still nothing.");
}

#[test]
fn test_cloned() {
    let words = [String::from("a"), String::from("b")];
    let owned: Vec<String> = drain(of_iter(words.iter()).cloned());
    assert_eq!(owned, words);
}

#[test]
fn test_combinators_clone_independently() {
    let mut seq = of_iter(0..6).filter(|i| i % 2 == 0).map(|i| i * i);
    assert_eq!(seq.next(), Some(0));
    let copy = seq.clone();
    assert_eq!(drain(seq), [4, 16]);
    assert_eq!(drain(copy), [4, 16], "Combinator chains clone their whole state.");
}

#[test]
fn test_memo_pulls_source_once() {
    let produced = Cell::new(0);
    let mut first = counted_source(4, &produced).memo();
    let mut second = first.clone();

    assert_eq!(first.next(), Some(0));
    assert_eq!(first.next(), Some(1));
    assert_eq!(second.next(), Some(0), "A clone should replay buffered elements.");
    assert_eq!(produced.get(), 2, "Replaying must not pull the source again.");

    let third = second.clone();
    assert_eq!(drain(first), [2, 3]);
    assert_eq!(drain(second), [1, 2, 3]);
    assert_eq!(drain(third), [1, 2, 3], "Every clone should see the whole remainder.");
    assert_eq!(produced.get(), 5, "Each element comes from the source once, plus the end.");
}

#[test]
fn test_memo_count() {
    let mut first = of_iter(0..5).memo();
    let second = first.clone();
    first.next();
    first.next();
    assert_eq!(first.count(), Count::Known(3));
    assert_eq!(second.count(), Count::Known(5), "Buffered elements should be counted.");

    let produced = Cell::new(0);
    assert_eq!(counted_source(3, &produced).memo().count(), Count::Unknown);
}

#[test]
fn test_memo_releases_buffer() {
    let counter = CountedDrop::new(0);
    let items = vec![counter.clone(), counter.clone(), counter.clone()];
    let mut first = of_iter(items).memo();
    let mut second = first.clone();

    first.next();
    first.next();
    // Each pull hands out a clone which is dropped immediately here.
    assert_eq!(counter.drops(), 2);

    second.next();
    assert_eq!(
        counter.drops(), 4,
        "Once every clone has passed an element, the buffered copy should be released."
    );

    drop(first);
    drop(second);
    assert_eq!(counter.drops(), 6, "Dropping every clone should release everything.");
}

#[test]
fn test_memo_long_chain_drop() {
    let mut lagging = init(200_000, |i| i).memo();
    let mut leading = lagging.clone();
    assert_eq!(leading.fast_forward(199_999), 199_999);
    assert_eq!(lagging.next(), Some(0));
    drop(lagging);
    assert_eq!(leading.next(), Some(199_999));
}
