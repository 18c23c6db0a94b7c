//! C ABI over `spiral-core`.
//!
//! Host numeric tables are passed as column-major `f64` buffers (every x
//! value, then every y value). Host logical vectors are `i32`, with `NA`
//! stored as `i32::MIN`. Each function returns a status code; on failure a
//! message is left in a per-thread slot readable through
//! [`spiral_last_error_message`].

use std::cell::RefCell;
use std::ffi::{CString, c_char};
use std::ptr;
use std::slice;

use spiral_core::{
    CellFlags, DEFAULT_PADDING, PointSequence, SpiralError, SpiralGenerator, calculate_limits,
    count_bounded,
};
use tracing::{debug, warn};

/// The call succeeded.
pub const SPIRAL_OK: i32 = 0;
/// A required pointer was null.
pub const SPIRAL_ERR_NULL: i32 = -1;
/// An output or input buffer had the wrong length.
pub const SPIRAL_ERR_BUFFER: i32 = -2;
/// An argument was rejected by the numeric routine.
pub const SPIRAL_ERR_ARGUMENT: i32 = -3;

type FfiResult<T> = Result<T, i32>;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(message: String) {
    LAST_ERROR.with(|slot| {
        *slot.borrow_mut() = Some(CString::new(message).unwrap_or_default());
    });
}

fn clear_last_error() {
    LAST_ERROR.with(|slot| {
        *slot.borrow_mut() = None;
    });
}

fn fail<T>(status: i32, message: impl Into<String>) -> FfiResult<T> {
    let message = message.into();
    warn!(status, %message, "spiral call rejected");
    set_last_error(message);
    Err(status)
}

fn argument<T>(err: SpiralError) -> FfiResult<T> {
    fail(SPIRAL_ERR_ARGUMENT, err.to_string())
}

fn status(result: FfiResult<()>) -> i32 {
    match result {
        Ok(()) => {
            clear_last_error();
            SPIRAL_OK
        }
        Err(code) => code,
    }
}

/// Copy `bytes` into a C buffer, always null terminating when `capacity > 0`.
///
/// # Safety
///
/// A non-null `buffer` must point to `capacity` writable bytes.
unsafe fn copy_to_buffer(bytes: &[u8], buffer: *mut c_char, capacity: usize) -> usize {
    if buffer.is_null() || capacity == 0 {
        return 0;
    }
    let to_copy = bytes.len().min(capacity - 1);
    // SAFETY: caller guarantees `buffer` points to `capacity` writable bytes.
    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr() as *const c_char, buffer, to_copy);
        *buffer.add(to_copy) = 0;
    }
    to_copy
}

/// Borrow `len` items from `data`, accepting a null pointer only when `len == 0`.
///
/// # Safety
///
/// A non-null `data` must point to `len` readable items that outlive `'a`.
unsafe fn input_slice<'a, T>(data: *const T, len: usize, label: &str) -> FfiResult<&'a [T]> {
    if len == 0 {
        return Ok(&[]);
    }
    if data.is_null() {
        return fail(SPIRAL_ERR_NULL, format!("{label} pointer was null"));
    }
    // SAFETY: non-null and sized per the function contract.
    Ok(unsafe { slice::from_raw_parts(data, len) })
}

/// Fill `out` with `num_points` Fermat spiral points as an `n x 2` column-major table.
///
/// `out_len` must equal `2 * num_points`. Returns [`SPIRAL_OK`] or a negative status.
///
/// # Safety
///
/// `out` must point to `out_len` writable `f64` values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spiral_generate(
    angle_start: f64,
    angle_end: f64,
    num_points: i32,
    out: *mut f64,
    out_len: usize,
) -> i32 {
    debug!(angle_start, angle_end, num_points, out_len, "spiral_generate");
    status((|| -> FfiResult<()> {
        // Negative counts fall through to the point-count check.
        let n = usize::try_from(num_points).unwrap_or(0);
        let spiral = SpiralGenerator::new(angle_start, angle_end, n).or_else(argument)?;
        if out.is_null() {
            return fail(SPIRAL_ERR_NULL, "out pointer was null");
        }
        if out_len != n * 2 {
            return fail(
                SPIRAL_ERR_BUFFER,
                format!("out buffer holds {out_len} values, expected {}", n * 2),
            );
        }
        // SAFETY: non-null and sized per the function contract.
        let out = unsafe { slice::from_raw_parts_mut(out, out_len) };
        let points = spiral.generate();
        points
            .write_column_major(out)
            .or_else(|e| fail(SPIRAL_ERR_BUFFER, e.to_string()))
    })())
}

/// Write symmetric plot limits `[-limit, limit]` for an `nrow x 2` column-major table into `out[0..2]`.
///
/// An empty table (`nrow == 0`, `vertices` may be null) yields `[-10, 10]`.
///
/// # Safety
///
/// `vertices` must point to `2 * nrow` readable values and `out` to two writable values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spiral_calculate_limits(
    vertices: *const f64,
    nrow: usize,
    padding: f64,
    out: *mut f64,
) -> i32 {
    debug!(nrow, padding, "spiral_calculate_limits");
    status((|| -> FfiResult<()> {
        if out.is_null() {
            return fail(SPIRAL_ERR_NULL, "out pointer was null");
        }
        let Some(len) = nrow.checked_mul(2) else {
            return fail(SPIRAL_ERR_BUFFER, "row count overflows the table size");
        };
        // SAFETY: forwarded from this function's contract.
        let data = unsafe { input_slice(vertices, len, "vertices")? };
        let table = PointSequence::from_column_major(data).or_else(argument)?;
        let limits = calculate_limits(&table, padding).or_else(argument)?;
        // SAFETY: non-null and holds two values per the function contract.
        let out = unsafe { slice::from_raw_parts_mut(out, 2) };
        out.copy_from_slice(&limits.to_array());
        Ok(())
    })())
}

/// Count cells whose flag is zero (bounded).
///
/// Any non-zero flag, including the host's `NA`, counts as infinite. Returns
/// the count, or a negative status on failure. An empty vector (`len == 0`,
/// `has_infinite` may be null) yields `0`.
///
/// # Safety
///
/// `has_infinite` must point to `len` readable `i32` values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spiral_count_bounded_cells(has_infinite: *const i32, len: usize) -> i32 {
    debug!(len, "spiral_count_bounded_cells");
    let result = (|| -> FfiResult<i32> {
        // SAFETY: forwarded from this function's contract.
        let raw = unsafe { input_slice(has_infinite, len, "has_infinite")? };
        let flags: CellFlags = raw.iter().map(|&flag| flag != 0).collect();
        match i32::try_from(count_bounded(&flags)) {
            Ok(count) => Ok(count),
            Err(_) => fail(SPIRAL_ERR_ARGUMENT, "bounded cell count does not fit in i32"),
        }
    })();
    match result {
        Ok(count) => {
            clear_last_error();
            count
        }
        Err(code) => code,
    }
}

/// Padding used by hosts that do not pass one.
#[unsafe(no_mangle)]
pub extern "C" fn spiral_default_padding() -> f64 {
    DEFAULT_PADDING
}

/// Copy the label of column `index` (`0 => "x"`, `1 => "y"`) into `buffer`.
///
/// Returns the number of bytes copied, excluding the null terminator, or
/// `0` for an unknown column.
///
/// # Safety
///
/// A non-null `buffer` must point to `capacity` writable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spiral_column_name(index: usize, buffer: *mut c_char, capacity: usize) -> usize {
    match PointSequence::COLUMN_NAMES.get(index) {
        // SAFETY: forwarded from this function's contract.
        Some(name) => unsafe { copy_to_buffer(name.as_bytes(), buffer, capacity) },
        None => 0,
    }
}

/// Returns the length of the last error message (in bytes, excluding the
/// trailing null terminator).
#[unsafe(no_mangle)]
pub extern "C" fn spiral_last_error_length() -> usize {
    LAST_ERROR.with(|slot| slot.borrow().as_ref().map(|msg| msg.as_bytes().len()).unwrap_or(0))
}

/// Copies the last error message into `buffer` and returns the number of
/// bytes copied (excluding the null terminator). Returns `0` when no error
/// is stored.
///
/// # Safety
///
/// A non-null `buffer` must point to `capacity` writable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spiral_last_error_message(buffer: *mut c_char, capacity: usize) -> usize {
    LAST_ERROR.with(|slot| match slot.borrow().as_ref() {
        // SAFETY: forwarded from this function's contract.
        Some(message) => unsafe { copy_to_buffer(message.as_bytes(), buffer, capacity) },
        None => 0,
    })
}

/// Clears the last error so subsequent calls observe an empty state.
#[unsafe(no_mangle)]
pub extern "C" fn spiral_clear_last_error() {
    clear_last_error();
}
