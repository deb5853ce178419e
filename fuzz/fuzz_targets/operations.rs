#![no_main]

use libfuzzer_sys::fuzz_target;
use minchain::{Operation, Stack};

fuzz_target!(|ops: Vec<Operation<i32>>| {
    let mut stack = Stack::new();
    // bottom to top
    let mut model: Vec<i32> = vec![];

    for op in ops {
        match op {
            Operation::Push { item } => {
                stack.push(item);
                model.push(item);
            }
            Operation::Pop => {
                assert_eq!(stack.try_pop(), model.pop());
            }
            Operation::Top => {
                assert_eq!(stack.top(), model.last());
            }
            Operation::Min => {
                assert_eq!(stack.min(), model.iter().min());
            }
            Operation::Append { items } => {
                let other: Stack<i32> = items.iter().copied().collect();
                stack.append(Some(&other)).unwrap();
                model.extend(items);
            }
            Operation::AppendReverse { items } => {
                let other: Stack<i32> = items.iter().copied().collect();
                stack.append_reverse(Some(&other)).unwrap();
                model.extend(items.into_iter().rev());
            }
            Operation::Reverse => {
                stack = stack.reverse();
                model.reverse();
            }
            Operation::Sort => {
                stack.sort();
                model.sort_unstable_by(|a, b| b.cmp(a));
            }
            Operation::SortN => {
                stack.sort_n();
                model.sort_unstable_by(|a, b| b.cmp(a));
            }
        }

        assert_eq!(stack.len(), model.len());
        assert_eq!(stack.min(), model.iter().min());
    }

    assert_eq!(stack.into_vec(), model);
});
