use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, Pat, Type};

/// Time a probe stage when the `perf_stats` feature is enabled.
///
/// Wraps the function body in a drop guard that logs the elapsed time through
/// `tracing::info!` on exit. With `perf_stats` disabled the guard is compiled
/// out entirely.
///
/// # Features
/// - Auto-detects an integer `round` (or `_round`) parameter for round-based logging
/// - Logs when duration > threshold OR every 100 rounds (if round available)
///
/// # Example
/// ```ignore
/// #[profile]
/// pub fn trig_stage(config: &ProbeConfig, round: u32, trace: &mut Vec<Fixed>) {
///     // ... work ...
/// }
/// ```
///
/// # Optional Parameters
/// ```ignore
/// #[profile(2)]  // Custom threshold in milliseconds
/// pub fn expensive_stage() { ... }
/// ```
#[proc_macro_attribute]
pub fn profile(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    let threshold_ms: u128 = if attr.is_empty() {
        1
    } else {
        attr.to_string().trim().parse().unwrap_or(1)
    };

    let attrs = &input.attrs;
    let vis = &input.vis;
    let sig = &input.sig;
    let block = &input.block;
    let fn_name_str = sig.ident.to_string();

    // Detect a round counter parameter (`round: u32`, `_round: usize`, ...)
    let round_ident = sig.inputs.iter().find_map(|arg| {
        if let FnArg::Typed(pat_type) = arg {
            if let Pat::Ident(pat_ident) = &*pat_type.pat {
                let is_round = pat_ident.ident == "round" || pat_ident.ident == "_round";
                if is_round && is_integer_type(&pat_type.ty) {
                    return Some(pat_ident.ident.clone());
                }
            }
        }
        None
    });

    let profile_guard_def = if let Some(round_ident) = round_ident {
        quote! {
            struct ProfileGuard {
                name: &'static str,
                start: std::time::Instant,
                round: u64,
            }
            impl Drop for ProfileGuard {
                fn drop(&mut self) {
                    let elapsed = self.start.elapsed();
                    if elapsed.as_millis() > #threshold_ms || (self.round % 100 == 0) {
                        ::tracing::info!(
                            "[PERF] {} (round {}): {:?}",
                            self.name,
                            self.round,
                            elapsed
                        );
                    }
                }
            }
            ProfileGuard {
                name: #fn_name_str,
                start: std::time::Instant::now(),
                round: #round_ident as u64,
            }
        }
    } else {
        quote! {
            struct ProfileGuard {
                name: &'static str,
                start: std::time::Instant,
            }
            impl Drop for ProfileGuard {
                fn drop(&mut self) {
                    let elapsed = self.start.elapsed();
                    if elapsed.as_millis() > #threshold_ms {
                        ::tracing::info!("[PERF] {}: {:?}", self.name, elapsed);
                    }
                }
            }
            ProfileGuard {
                name: #fn_name_str,
                start: std::time::Instant::now(),
            }
        }
    };

    let output = quote! {
        #(#attrs)*
        #vis #sig {
            #[cfg(feature = "perf_stats")]
            let _profile_timer = {
                #profile_guard_def
            };

            #block
        }
    };

    output.into()
}

fn is_integer_type(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .get_ident()
            .map(|ident| {
                matches!(
                    ident.to_string().as_str(),
                    "u8" | "u16" | "u32" | "u64" | "usize" | "i32" | "i64"
                )
            })
            .unwrap_or(false),
        _ => false,
    }
}
