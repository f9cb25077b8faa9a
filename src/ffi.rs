// src/ffi.rs
//! C ABI entry points for hosts that share flat buffers with this crate,
//! such as a wasm page or a C caller.
//!
//! Lengths travel as plain integers next to each pointer. Every function
//! returns 0 on success or a negative [`PaintError::code`]; on failure nothing
//! is written.

use std::slice;

use tracing::warn;

use crate::error::{PaintError, Result, area};
use crate::render::{self, Color};

/// Borrow `len` elements at `ptr`. A zero length never dereferences `ptr`.
///
/// # Safety
/// When `len > 0` and `ptr` is non-null, `ptr` must be valid for reads of
/// `len` elements for the returned lifetime.
unsafe fn borrow<'a, T>(ptr: *const T, len: usize, what: &'static str) -> Result<&'a [T]> {
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(PaintError::NullPointer(what));
    }
    Ok(unsafe { slice::from_raw_parts(ptr, len) })
}

/// Mutable counterpart of [`borrow`].
///
/// # Safety
/// When `len > 0` and `ptr` is non-null, `ptr` must be valid for reads and
/// writes of `len` elements and not aliased for the returned lifetime.
unsafe fn borrow_mut<'a, T>(ptr: *mut T, len: usize, what: &'static str) -> Result<&'a mut [T]> {
    if len == 0 {
        return Ok(&mut []);
    }
    if ptr.is_null() {
        return Err(PaintError::NullPointer(what));
    }
    Ok(unsafe { slice::from_raw_parts_mut(ptr, len) })
}

fn status(call: &'static str, result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            warn!(call, %err, "rejected");
            err.code()
        }
    }
}

/// Blend `a` and `b` into `result`, giving `a` a weight of `a_percent`.
///
/// # Safety
/// Each pointer must be null or point to a valid [`Color`]. `result` may alias
/// `a` or `b`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mix_colors(
    result: *mut Color,
    a: *const Color,
    b: *const Color,
    a_percent: f32,
) -> i32 {
    if result.is_null() {
        return status("mix_colors", Err(PaintError::NullPointer("result")));
    }
    if a.is_null() || b.is_null() {
        return status("mix_colors", Err(PaintError::NullPointer("source color")));
    }
    unsafe {
        let mixed = render::mix_colors(*a, *b, a_percent);
        *result = mixed;
    }
    0
}

/// Fill `dst_len` colors at `dst` with a gradient across `src_len` stops.
///
/// # Safety
/// `dst` must be valid for writes of `dst_len` colors and `src` for reads of
/// `src_len` colors. The two ranges must not overlap.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn compute_gradient(
    dst: *mut Color,
    dst_len: u32,
    src: *const Color,
    src_len: u32,
) -> i32 {
    let result = unsafe {
        borrow_mut(dst, dst_len as usize, "gradient destination").and_then(|dst| {
            let src = borrow(src, src_len as usize, "gradient stops")?;
            render::compute_gradient(dst, src)
        })
    };
    status("compute_gradient", result)
}

/// Paint one spectrum frame.
///
/// # Safety
/// `image` must be valid for writes of `width * height` colors, `data` for
/// reads of `width` magnitudes, and both gradients for reads of `height`
/// colors. `image` must not overlap any input.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn paint_spectrum(
    width: u32,
    height: u32,
    image: *mut Color,
    data: *const u16,
    gradient_foreground: *const Color,
    gradient_background: *const Color,
) -> i32 {
    let (width, height) = (width as usize, height as usize);
    let result = area(width, height).and_then(|len| unsafe {
        let image = borrow_mut(image, len, "image")?;
        let data = borrow(data, width, "magnitude")?;
        let foreground = borrow(gradient_foreground, height, "foreground gradient")?;
        let background = borrow(gradient_background, height, "background gradient")?;
        render::paint_spectrum(width, height, image, data, foreground, background)
    });
    status("paint_spectrum", result)
}
