mod page_links;
