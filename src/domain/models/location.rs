use crate::domain::models::image::ObjectKey;

/// Bucket and region of the blob store, which together fix the public URL
/// of every object written to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketLocation {
    bucket: String,
    region: String,
}

impl BucketLocation {
    pub fn new(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
        }
    }

    /// `https://{bucket}.s3.{region}.amazonaws.com/{key}`
    pub fn public_url(&self, key: &ObjectKey) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket,
            self.region,
            key.as_str()
        )
    }

    /// Inverse of [`BucketLocation::public_url`].
    #[cfg(test)]
    pub fn parse_public_url(url: &str) -> Option<(Self, ObjectKey)> {
        let rest = url.strip_prefix("https://")?;
        let (host, key) = rest.split_once('/')?;
        let host = host.strip_suffix(".amazonaws.com")?;
        let (bucket, region) = host.rsplit_once(".s3.")?;
        if bucket.is_empty() || region.is_empty() || key.is_empty() {
            return None;
        }
        Some((
            Self::new(bucket, region),
            ObjectKey::from_raw(key.to_string()),
        ))
    }
}
