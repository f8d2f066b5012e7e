use anyhow::Context;
use bytes::Buf;
use hyper::Body;
use serde::Deserialize;

pub struct HttpRequest;

impl HttpRequest {
    pub async fn bytes(body: Body) -> anyhow::Result<impl Buf> {
        // TODO: reject bodies above a configured content length
        hyper::body::aggregate(body)
            .await
            .with_context(|| "Error in aggregating body")
    }

    pub async fn value<T>(body: Body) -> anyhow::Result<T>
        where
            T: for<'de> Deserialize<'de>,
    {
        let whole_body = Self::bytes(body).await?;

        serde_json::from_reader(whole_body.reader())
            .with_context(|| "Error in decoding body_as_value")
    }
}
