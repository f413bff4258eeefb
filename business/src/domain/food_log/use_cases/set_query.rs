pub struct SetQueryParams {
    pub query: String,
}

pub trait SetQueryUseCase: Send + Sync {
    fn execute(&self, params: SetQueryParams);
}
