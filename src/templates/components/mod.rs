use crate::domain::listing::Listing;
use maud::{html, Markup};

pub fn listing_item(listing: &Listing) -> Markup {
    html! {
        li {
            strong { (listing.name) } " - " (listing.location) " - ZMW " (listing.price)
            br;
            "Contact: " (listing.contact)
        }
    }
}

pub fn listing_form() -> Markup {
    html! {
        form id="listing-form" class="listing-form" {
            input name="name" placeholder="Property Name" required;
            input name="location" placeholder="Location" required;
            input name="price" placeholder="Price" required;
            input name="contact" placeholder="Contact Info" required;
            button type="submit" { "Add Listing" }
        }
    }
}
