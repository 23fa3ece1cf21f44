use md5::{Digest, Md5};

/// Build the string PayFast hashes for a signature
///
/// Pairs with an empty value are dropped, the rest are joined as `key=value`
/// with `&` in the order given (no sorting). A non-empty passphrase is appended
/// as `&passphrase=<passphrase>`, even when no pair survived the filter.
pub fn signature_string<I, K, V>(data: I, passphrase: &str) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pf_string = data
        .into_iter()
        .filter(|(_, value)| !value.as_ref().is_empty())
        .map(|(key, value)| format!("{}={}", key.as_ref(), value.as_ref()))
        .collect::<Vec<_>>()
        .join("&");

    if !passphrase.is_empty() {
        pf_string.push_str("&passphrase=");
        pf_string.push_str(passphrase);
    }

    pf_string
}

/// Compute the PayFast signature: lowercase hex MD5 of [`signature_string`]
pub fn compute_signature<I, K, V>(data: I, passphrase: &str) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut hasher = Md5::new();
    hasher.update(signature_string(data, passphrase).as_bytes());
    format!("{:x}", hasher.finalize())
}
