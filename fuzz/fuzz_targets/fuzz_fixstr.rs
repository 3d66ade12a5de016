#![no_main]

//! Differential fuzz: drive a `FixedStr` and a plain `Vec<u8>` reference
//! model through the same operation sequence and require the content views
//! to agree after every step.

use arbitrary::Arbitrary;
use fixstr::{ERROR_MARKER, FixedStr};
use libfuzzer_sys::fuzz_target;

const CAP: usize = 12;
const USABLE: usize = CAP - 1;

#[derive(Arbitrary, Debug)]
enum Op {
    Push(u8),
    Append(Vec<u8>),
    Assign(Vec<u8>),
    Clear,
    Compare(Vec<u8>),
    ByteAt(usize),
    SwapWithWider(Vec<u8>),
}

fn model_extend(model: &mut Vec<u8>, bytes: &[u8]) {
    for &b in bytes {
        if model.len() < USABLE {
            model.push(b);
        }
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut s = FixedStr::<CAP>::new();
    let mut model: Vec<u8> = Vec::new();

    for op in ops {
        match op {
            Op::Push(b) => {
                s.push(b);
                model_extend(&mut model, &[b]);
            }
            Op::Append(bytes) => {
                s.append(bytes.as_slice());
                model_extend(&mut model, &bytes);
            }
            Op::Assign(bytes) => {
                s.assign(bytes.as_slice());
                model.clear();
                model_extend(&mut model, &bytes);
            }
            Op::Clear => {
                s.clear();
                model.clear();
            }
            Op::Compare(bytes) => {
                assert_eq!(s.compare(bytes.as_slice()), model.as_slice().cmp(bytes.as_slice()));
            }
            Op::ByteAt(pos) => {
                let expected = if pos < USABLE {
                    // In-capacity reads past the length see raw buffer bytes;
                    // only the content region is modeled.
                    if pos < model.len() { Some(model[pos]) } else { None }
                } else {
                    Some(ERROR_MARKER)
                };
                if let Some(expected) = expected {
                    assert_eq!(s.byte_at(pos), expected);
                }
            }
            Op::SwapWithWider(bytes) => {
                let mut wide = FixedStr::<64>::from(bytes.as_slice());
                s.swap_with(&mut wide);
                assert_eq!(wide.as_bytes(), model.as_slice());
                model.clear();
                model_extend(&mut model, &bytes[..bytes.len().min(63)]);
            }
        }
        assert_eq!(s.as_bytes(), model.as_slice());
        assert_eq!(s.len(), model.len());
        assert!(s.len() <= USABLE);
    }
});
