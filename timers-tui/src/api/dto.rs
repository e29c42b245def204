use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimerRequest<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub project: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTimerRequest<'a> {
    pub id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTimerRequest<'a> {
    pub id: &'a str,
    pub start: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTimerRequest<'a> {
    pub id: &'a str,
    pub stop: i64,
}
