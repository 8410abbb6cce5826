// FFI functions are inherently unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// inflect-ffi: C-compatible FFI layer for the English inflection engine.
//
// The engine is stateless, so there is no handle to create or free; every
// call uses the built-in English tables.
//
// Memory management rules:
// - Returned string arrays are NULL-terminated and must be freed with
//   `inflect_free_str_array`.
// - `inflect_version` returns a static string that must NOT be freed.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char};
use std::ptr;
use std::sync::LazyLock;

use inflect_core::{Inflection, Word};
use inflect_en::InflectionEngine;

// ── Inflection ──────────────────────────────────────────────────

/// Singular form(s) of a word.
///
/// Returns a NULL-terminated array of C strings with one entry for a certain
/// result and two or more for an ambiguous one, in rule order. Caller must
/// free with `inflect_free_str_array`. Returns NULL if `word` is NULL or not
/// valid UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn inflect_singularize(word: *const c_char) -> *mut *mut c_char {
    let Some(word) = cstr_to_word(word) else {
        return ptr::null_mut();
    };
    inflection_to_c_array(InflectionEngine::english().singularize_word(&word))
}

/// Plural form(s) of a word.
///
/// Same contract as `inflect_singularize`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn inflect_pluralize(word: *const c_char) -> *mut *mut c_char {
    let Some(word) = cstr_to_word(word) else {
        return ptr::null_mut();
    };
    inflection_to_c_array(InflectionEngine::english().pluralize_word(&word))
}

/// Number of entries before the NULL terminator. Returns 0 for NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn inflect_candidate_count(arr: *const *mut c_char) -> usize {
    if arr.is_null() {
        return 0;
    }
    let mut n = 0;
    while !unsafe { *arr.add(n) }.is_null() {
        n += 1;
    }
    n
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library (static).
/// Do NOT free this pointer.
#[unsafe(no_mangle)]
pub extern "C" fn inflect_version() -> *const c_char {
    static VERSION: LazyLock<CString> =
        LazyLock::new(|| CString::new(env!("CARGO_PKG_VERSION")).unwrap_or_default());
    VERSION.as_ptr()
}

/// Free a NULL-terminated array returned by `inflect_singularize` or
/// `inflect_pluralize`. NULL is ignored.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn inflect_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_word(s: *const c_char) -> Option<Word> {
    if s.is_null() {
        return None;
    }
    Word::from_utf8(unsafe { CStr::from_ptr(s) }.to_bytes()).ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn inflection_to_c_array(inflection: Inflection<Word>) -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = inflection.iter().map(|w| str_to_c(w.as_str())).collect();
    ptrs.push(ptr::null_mut()); // NULL terminator
    // Boxed slice: length and capacity agree, so the free side can rebuild it.
    Box::into_raw(ptrs.into_boxed_slice()).cast::<*mut c_char>()
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, i + 1)) });
}
