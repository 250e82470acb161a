//! 内容端点 (blogs / portfolios / reviews)

use super::{Ack, ApiClient};
use mehndihub_shared::{
    AddPortfolioItemRequest, ApiResponse, BlogPost, CreateBlogRequest, CreateReviewRequest,
    PortfolioItem, Review,
};

impl ApiClient {
    pub async fn list_blogs(&self) -> Result<ApiResponse<Vec<BlogPost>>, String> {
        self.get("/blogs").await
    }

    pub async fn get_blog(&self, id: &str) -> Result<ApiResponse<BlogPost>, String> {
        self.get(&format!("/blogs/{}", id)).await
    }

    pub async fn create_blog(&self, blog: &CreateBlogRequest) -> Result<ApiResponse<BlogPost>, String> {
        self.post("/blogs", blog).await
    }

    pub async fn update_blog(
        &self,
        id: &str,
        blog: &CreateBlogRequest,
    ) -> Result<ApiResponse<BlogPost>, String> {
        self.put(&format!("/blogs/{}", id), blog).await
    }

    pub async fn delete_blog(&self, id: &str) -> Result<ApiResponse<Ack>, String> {
        self.delete(&format!("/blogs/{}", id)).await
    }

    /// 某画师的作品集
    pub async fn list_portfolio(
        &self,
        artist_id: &str,
    ) -> Result<ApiResponse<Vec<PortfolioItem>>, String> {
        self.get(&format!("/portfolios/{}", artist_id)).await
    }

    /// 画师为自己的作品集添加条目（media_url 来自直传，见 uploads）
    pub async fn add_portfolio_item(
        &self,
        item: &AddPortfolioItemRequest,
    ) -> Result<ApiResponse<PortfolioItem>, String> {
        self.post("/portfolios", item).await
    }

    pub async fn delete_portfolio_item(&self, id: &str) -> Result<ApiResponse<Ack>, String> {
        self.delete(&format!("/portfolios/items/{}", id)).await
    }

    /// 某画师收到的评价
    pub async fn list_reviews(&self, artist_id: &str) -> Result<ApiResponse<Vec<Review>>, String> {
        self.get(&format!("/reviews/artist/{}", artist_id)).await
    }

    pub async fn create_review(
        &self,
        review: &CreateReviewRequest,
    ) -> Result<ApiResponse<Review>, String> {
        self.post("/reviews", review).await
    }
}
