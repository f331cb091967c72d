use json_pydantic::{generate, generate_with_report, GenerateOptions};
use serde_json::json;

fn normalized() -> GenerateOptions {
    GenerateOptions { normalize_camel_case: true, ..GenerateOptions::default() }
}

#[test]
fn camel_case_document_with_datetime() {
    let v = json!({"id": 1, "createdAt": "2024-01-01T00:00:00Z", "tags": ["a", "b"]});
    let expected = "\
from pydantic import BaseModel, Field, ConfigDict
from typing import Any
from datetime import datetime


class MyModel(BaseModel):
    id: int
    created_at: datetime = Field(alias='createdAt')
    tags: list[str]

    model_config = ConfigDict(populate_by_name=True)";
    assert_eq!(generate(&v, &normalized()), expected);
}

#[test]
fn list_of_objects_is_singularized() {
    let v = json!({"items": [{"id": 1}]});
    let expected = "\
from pydantic import BaseModel, Field, ConfigDict
from typing import Any


class Item(BaseModel):
    id: int

class MyModel(BaseModel):
    items: list[Item]";
    assert_eq!(generate(&v, &GenerateOptions::default()), expected);
}

#[test]
fn simple_flat_document() {
    let v = json!({"name": "John Doe", "age": 30, "email": "john@example.com", "is_active": true});
    let out = generate(&v, &GenerateOptions::default());
    for line in ["class MyModel(BaseModel):", "    name: str", "    age: int", "    email: str", "    is_active: bool"] {
        assert!(out.contains(line), "missing {line:?} in\n{out}");
    }
    assert!(!out.contains("from datetime"));
}

#[test]
fn complex_document() {
    let v = json!({
        "user_id": 1234,
        "username": "johndoe",
        "is_active": true,
        "profile": {
            "full_name": "John Doe",
            "age": 30,
            "interests": ["coding", "hiking"],
            "empty": {},
        },
        "posts": [
            {"id": 1, "title": "Hello World", "tags": ["programming", "intro"]},
            {"id": 2, "title": "Pydantic", "tags": ["python"]},
        ],
        "last_login": "2023-01-15T14:30:45Z",
        "created_date": "2023-01-01",
        "metadata": null,
        "ratio": 0.75,
    });
    let report = generate_with_report(&v, &GenerateOptions::default());
    let expected = "\
from pydantic import BaseModel, Field, ConfigDict
from typing import Any
from datetime import date, datetime


class Profile(BaseModel):
    full_name: str
    age: int
    interests: list[str]
    empty: Empty

class Post(BaseModel):
    id: int
    title: str
    tags: list[str]

class Empty(BaseModel):
    pass

class MyModel(BaseModel):
    user_id: int
    username: str
    is_active: bool
    profile: Profile
    posts: list[Post]
    last_login: datetime
    created_date: date
    metadata: None
    ratio: float";
    assert_eq!(report.text, expected);
    assert!(report.collisions.is_empty());
}

#[test]
fn optional_and_aliased_fields_combine() {
    let v = json!({
        "userId": 1234,
        "userPosts": [{"postId": 1, "postTitle": "Hello World"}],
        "lastLoginDate": "2023-01-15T14:30:45Z",
    });
    let options = GenerateOptions { optional_fields: true, ..normalized() };
    let expected = "\
from pydantic import BaseModel, Field, ConfigDict
from typing import Any
from datetime import datetime


class UserPost(BaseModel):
    post_id: int | None = Field(default=None, alias='postId')
    post_title: str | None = Field(default=None, alias='postTitle')

    model_config = ConfigDict(populate_by_name=True)

class MyModel(BaseModel):
    user_id: int | None = Field(default=None, alias='userId')
    user_posts: list[UserPost] | None = Field(default=None, alias='userPosts')
    last_login_date: datetime | None = Field(default=None, alias='lastLoginDate')

    model_config = ConfigDict(populate_by_name=True)";
    assert_eq!(generate(&v, &options), expected);
}

#[test]
fn optional_without_aliases() {
    let v = json!({"name": "John Doe", "age": 30});
    let options = GenerateOptions { optional_fields: true, ..GenerateOptions::default() };
    let out = generate(&v, &options);
    assert!(out.contains("    name: str | None = None\n"));
    assert!(out.ends_with("    age: int | None = None"));
}

#[test]
fn every_reference_is_declared_exactly_once() {
    let v = json!({
        "a": {"b": {"c": {"d": 1}}, "list": [{"x": {"y": 2}}]},
        "b": {"c": {"d": 3}},
        "lists": [[{"not": "a model"}]],
    });
    let report = generate_with_report(&v, &normalized());
    for decl in &report.declarations {
        for name in decl.references() {
            let count = report.declarations.iter().filter(|d| d.name == name).count();
            assert_eq!(count, 1, "{name} referenced from {}", decl.name);
            assert_eq!(report.text.matches(&format!("class {name}(BaseModel):")).count(), 1);
        }
    }
}

#[test]
fn output_is_deterministic() {
    let v = json!({"z": 1, "a": {"m": [1, 2]}, "k": [{"q": "2023-01-01"}]});
    let options = GenerateOptions::default();
    assert_eq!(generate(&v, &options), generate(&v, &options));
}
