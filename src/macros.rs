// src/macros.rs

/// `String` shorthand: `s!()` is an empty string, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string-likes (`&str`, `String`, `&String`) into one `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from(::std::convert::AsRef::<str>::as_ref(&$first));
        $(
            s.push_str(::std::convert::AsRef::<str>::as_ref(&$rest));
        )+
        s
    }};
}
